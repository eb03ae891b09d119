//! # Route Configuration
//!
//! 애플리케이션의 모든 라우트와 추출자 설정을 한 곳에서 등록합니다.
//!
//! 본문/쿼리/경로 파싱 실패는 `AppError::BadRequest`로 변환되어
//! 다른 에러와 같은 `{timestamp, message, status}` 형태로 응답됩니다.

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config());

    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // 검색 경로가 "/{user_id}"에 가려지지 않도록 먼저 등록
    cfg.service(
        web::scope("/users")
            .service(handlers::users::search_by_birth_date)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::get_user)
            .service(handlers::users::patch_user)
            .service(handlers::users::delete_user)
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, req: &HttpRequest| {
        log::debug!("JSON 본문 파싱 실패 ({}): {}", req.path(), err);
        AppError::BadRequest(format!("Failed to read request: {}", err)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, req: &HttpRequest| {
        log::debug!("쿼리 파라미터 파싱 실패 ({}): {}", req.path(), err);
        AppError::BadRequest(format!("Invalid query parameters: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, req: &HttpRequest| {
        log::debug!("경로 파라미터 파싱 실패 ({}): {}", req.path(), err);
        AppError::BadRequest(format!("Invalid path parameters: {}", err)).into()
    })
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "PostgreSQL",
            "validation": "validator",
        }
    }))
}
