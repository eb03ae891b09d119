//! # Application Error Handling System
//!
//! 사용자 CRUD 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 서비스 계층은 예외를 던지는 대신 `AppError`를 `Result`로 반환하고,
//! 핸들러는 `?` 연산자로 그대로 전파합니다. 최종 HTTP 응답 변환은
//! `actix_web::ResponseError` 구현이 한 곳에서 담당합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidIdentifier` | 400 Bad Request | UUID 형식이 아닌 경로 ID |
//! | `ValidationFailed` | 400 Bad Request | 필드 검증 실패 |
//! | `UnderAge` | 400 Bad Request | 최소 나이 미달 |
//! | `InvalidRange` | 400 Bad Request | 생년월일 검색 범위 오류 |
//! | `BadRequest` | 400 Bad Request | 본문/쿼리/경로 파싱 실패 |
//! | `NotFound` | 404 Not Found | 사용자 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "timestamp": "2024-01-01T12:00:00.000",
//!   "message": "Invalid UUID",
//!   "status": 400
//! }
//! ```
//!
//! 5xx 에러는 원본 메시지를 서버 로그에만 남기고, 클라이언트에는
//! 고정된 `"Something went wrong"` 메시지만 전달합니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 5xx 응답에 사용되는 클라이언트 노출 메시지
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트 입력 오류(400), 리소스 없음(404), 시스템 오류(500)로 나뉩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 경로의 사용자 ID가 UUID 형식이 아님
    #[error("Invalid UUID")]
    InvalidIdentifier,

    /// 필드 검증 실패
    ///
    /// 실패한 필드 이름과 사람이 읽을 수 있는 메시지를 함께 보관합니다.
    #[error("{message}")]
    ValidationFailed { field: String, message: String },

    /// 최소 나이 검증 실패
    ///
    /// 일반 검증 실패와 구분되는 별도의 에러로 보고됩니다.
    #[error("{0}")]
    UnderAge(String),

    /// 생년월일 범위 검색 조건 오류
    #[error("{0}")]
    InvalidRange(String),

    /// 요청 본문, 쿼리, 경로 파라미터를 읽을 수 없음
    #[error("{0}")]
    BadRequest(String),

    /// 리소스를 찾을 수 없음
    #[error("{0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 필드 검증 실패 에러를 생성합니다.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 클라이언트에게 전달할 메시지를 반환합니다.
    ///
    /// 5xx 에러는 내부 정보를 숨기고 고정 메시지를 반환합니다.
    pub fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 에러 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            timestamp: chrono::Local::now().naive_local(),
            message: message.into(),
            status: status.as_u16(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier
            | AppError::ValidationFailed { .. }
            | AppError::UnderAge(_)
            | AppError::InvalidRange(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 원본 에러를 `error` 레벨로 기록한 뒤 고정 메시지로 응답합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 중 내부 오류 발생: {}", self);
        } else {
            log::debug!("요청 거부됨 ({}): {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(ErrorResponse::new(self.client_message(), status))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let user = serde_json::to_value(&user).context("사용자 직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
