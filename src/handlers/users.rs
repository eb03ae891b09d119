//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청을 추출해 [`UserService`]에 위임하고, 결과를 `{"data": ...}`
//! envelope로 감싸 응답합니다. 에러는 `?`로 전파되어 `AppError`의
//! `ResponseError` 구현이 표준 에러 본문으로 변환합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK |
//! | `GET` | `/users/search/birthDate/between` | 생년월일 범위 검색 | 200 OK |
//! | `POST` | `/users` | 사용자 생성 (`Location` 헤더 포함) | 200 OK |
//! | `PUT` | `/users` | 사용자 전체 수정 | 200 OK |
//! | `PATCH` | `/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 202 Accepted |
//!
//! ## 검색 쿼리 파라미터
//!
//! | 이름 | 타입 | 기본값 |
//! |------|------|--------|
//! | `from` | `YYYY-MM-DD` | (필수) |
//! | `to` | `YYYY-MM-DD` | (필수) |
//! | `page` | 0부터 시작하는 정수 | 0 |
//! | `size` | 1 이상의 정수 | 10 |
//!
//! 검색 경로는 `/{user_id}`보다 먼저 등록되어야 합니다.

use actix_web::http::header;
use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};
use crate::core::errors::AppError;
use crate::domain::dto::page::DEFAULT_PAGE_SIZE;
use crate::domain::dto::users::request::UserPayload;
use crate::domain::dto::users::response::Dto;
use crate::domain::dto::PageRequest;
use crate::services::users::UserService;

/// 생년월일 범위 검색 쿼리
#[derive(Debug, Deserialize)]
pub struct BirthDateRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// 생년월일 범위 검색
///
/// # 응답
///
/// ```json
/// {
///   "data": {
///     "content": [ { "id": "...", "birthDate": "1995-05-20", "...": "..." } ],
///     "page": 0,
///     "size": 10,
///     "totalElements": 1,
///     "totalPages": 1
///   }
/// }
/// ```
#[get("/search/birthDate/between")]
pub async fn search_by_birth_date(
    query: web::Query<BirthDateRangeQuery>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.size)?;

    let result = user_service
        .find_all_by_birth_date_between(query.from, query.to, page)
        .await?;

    Ok(HttpResponse::Ok().json(Dto::new(result)))
}

/// ID로 사용자 조회
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.find_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(Dto::new(user)))
}

/// 새 사용자 생성
///
/// 저장된 사용자와 함께 `Location: /users/{id}` 헤더를 반환합니다.
#[post("")]
pub async fn create_user(
    payload: web::Json<UserPayload>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.save(payload.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::LOCATION, format!("/users/{}", user.id)))
        .json(Dto::new(user)))
}

/// 사용자 전체 수정
///
/// 본문의 `id`에 해당하는 레코드를 통째로 교체합니다. `id`가 없으면 새로 생성됩니다.
#[put("")]
pub async fn update_user(
    payload: web::Json<UserPayload>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.save(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(Dto::new(user)))
}

/// 사용자 부분 수정
///
/// ```json
/// { "firstName": "Taras", "lastName": "Shevchenko" }
/// ```
#[patch("/{user_id}")]
pub async fn patch_user(
    user_id: web::Path<String>,
    fields: web::Json<Map<String, Value>>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.partial_update(&user_id, &fields).await?;

    Ok(HttpResponse::Ok().json(Dto::new(user)))
}

/// 사용자 삭제
///
/// 존재하지 않는 ID도 `202 Accepted`로 응답합니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    user_service.delete(&user_id).await?;

    Ok(HttpResponse::Accepted().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, App};
    use actix_web::http::StatusCode;
    use serde_json::json;
    use uuid::Uuid;
    use crate::core::clock::FixedClock;
    use crate::repositories::users::in_memory_user_repo::InMemoryUserRepository;
    use crate::routes::configure_all_routes;
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn user_service() -> web::Data<UserService> {
        web::Data::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            18,
            Arc::new(FixedClock(today())),
        ))
    }

    fn andrii() -> Value {
        json!({
            "email": "a@b.com",
            "firstName": "Andrii",
            "lastName": "Heraskin",
            "birthDate": "2000-01-01",
            "phoneNumber": "+380678955568"
        })
    }

    macro_rules! app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data($service.clone())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_returns_generated_id_and_location() {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::post().uri("/users").set_json(andrii()).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .unwrap();

        let body: Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(location, format!("/users/{}", id));
        assert_eq!(body["data"]["firstName"], "Andrii");
        assert_eq!(body["data"]["birthDate"], "2000-01-01");
    }

    #[actix_web::test]
    async fn test_created_user_can_be_fetched() {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::post().uri("/users").set_json(andrii()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap();

        let req = test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(fetched["data"], created["data"]);
    }

    #[actix_web::test]
    async fn test_get_with_malformed_id_is_bad_request() {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::get().uri("/users/not-a-uuid").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid UUID");
        assert_eq!(body["status"], 400);
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_get_missing_user_is_not_found() {
        let service = user_service();
        let app = app!(service);
        let id = Uuid::new_v4();

        let req = test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], format!("User with id='{}' not found", id));
    }

    #[actix_web::test]
    async fn test_create_without_body_is_bad_request() {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::post().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
    }

    #[actix_web::test]
    async fn test_create_under_age_is_bad_request() {
        let service = user_service();
        let app = app!(service);

        let mut payload = andrii();
        payload["birthDate"] = json!("2010-01-01");

        let req = test::TestRequest::post().uri("/users").set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "You must be at least 18 years old");
    }

    #[actix_web::test]
    async fn test_create_with_missing_field_reports_it() {
        let service = user_service();
        let app = app!(service);

        let mut payload = andrii();
        payload.as_object_mut().unwrap().remove("lastName");

        let req = test::TestRequest::post().uri("/users").set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Last name cannot be empty");
    }

    #[actix_web::test]
    async fn test_put_replaces_existing_user() {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::post().uri("/users").set_json(andrii()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let mut replacement = andrii();
        replacement["id"] = created["data"]["id"].clone();
        replacement["email"] = json!("taras@kobzar.ua");

        let req = test::TestRequest::put().uri("/users").set_json(replacement).to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(updated["data"]["id"], created["data"]["id"]);
        assert_eq!(updated["data"]["email"], "taras@kobzar.ua");
    }

    async fn put_rejection(field: &str, value: Value, expected_message: &str) {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::post().uri("/users").set_json(andrii()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let mut replacement = andrii();
        replacement["id"] = json!(id);
        replacement[field] = value;

        let req = test::TestRequest::put().uri("/users").set_json(replacement).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], expected_message);

        let req = test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
        let stored: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored["data"], created["data"]);
    }

    #[actix_web::test]
    async fn test_put_under_age_is_rejected_and_record_kept() {
        put_rejection("birthDate", json!("2010-01-01"), "You must be at least 18 years old").await;
    }

    #[actix_web::test]
    async fn test_put_blank_first_name_is_rejected_and_record_kept() {
        put_rejection("firstName", json!("   "), "First name cannot be empty").await;
    }

    #[actix_web::test]
    async fn test_patch_updates_given_fields() {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::post().uri("/users").set_json(andrii()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/users/{}", id))
            .set_json(json!({"firstName": "Taras", "lastName": "Shevchenko", "nonExisting": "x"}))
            .to_request();
        let patched: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(patched["data"]["firstName"], "Taras");
        assert_eq!(patched["data"]["lastName"], "Shevchenko");
        assert_eq!(patched["data"]["email"], created["data"]["email"]);
        assert_eq!(patched["data"]["birthDate"], created["data"]["birthDate"]);
    }

    #[actix_web::test]
    async fn test_patch_with_malformed_body_is_bad_request() {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::patch()
            .uri(&format!("/users/{}", Uuid::new_v4()))
            .insert_header(header::ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_missing_user_is_accepted() {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::delete()
            .uri(&format!("/users/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::ACCEPTED);
    }

    #[actix_web::test]
    async fn test_delete_with_malformed_id_is_bad_request() {
        let service = user_service();
        let app = app!(service);

        let req = test::TestRequest::delete().uri("/users/123").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_search_returns_only_users_in_range() {
        let service = user_service();
        let app = app!(service);

        for birth_date in ["1985-03-01", "1995-05-20", "2000-01-01"] {
            let mut payload = andrii();
            payload["birthDate"] = json!(birth_date);
            let req = test::TestRequest::post().uri("/users").set_json(payload).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get()
            .uri("/users/search/birthDate/between?from=1990-01-01&to=2000-01-01")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let content = body["data"]["content"].as_array().unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0]["birthDate"], "1995-05-20");
        assert_eq!(content[1]["birthDate"], "2000-01-01");
        assert_eq!(body["data"]["totalElements"], 2);
        assert_eq!(body["data"]["size"], 10);
    }

    #[actix_web::test]
    async fn test_search_with_inverted_range_is_bad_request() {
        let service = user_service();
        let app = app!(service);

        for uri in [
            "/users/search/birthDate/between?from=2000-01-01&to=1990-01-01",
            "/users/search/birthDate/between?to=1990-01-01",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "'From' date must be less than 'to'");
        }
    }

    #[actix_web::test]
    async fn test_search_with_malformed_query_is_bad_request() {
        let service = user_service();
        let app = app!(service);

        for uri in [
            "/users/search/birthDate/between?from=yesterday&to=2000-01-01",
            "/users/search/birthDate/between?from=1990-01-01&to=2000-01-01&size=0",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }
}
