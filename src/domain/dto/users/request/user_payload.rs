//! # 사용자 저장 요청 DTO
//!
//! `POST /users`(생성)와 `PUT /users`(전체 수정)의 요청 본문입니다.
//! 모든 필드를 JSON 수준에서는 선택값으로 받아, 필수 필드가 빠졌을 때
//! 역직렬화 실패 대신 필드별 검증 메시지를 돌려줄 수 있도록 합니다.
//!
//! ## 검증 규칙
//!
//! ### 이메일 (`email`)
//! - 필수, 공백 금지
//! - `<local>@<domain>.<tld>` 형태
//!
//! ### 이름 (`firstName`, `lastName`)
//! - 필수, 공백 금지
//!
//! ### 생년월일 (`birthDate`)
//! - 필수 (미래 날짜 금지와 최소 나이는 서비스에서 검증)
//!
//! ### 전화번호 (`phoneNumber`)
//! - 선택, 값이 있으면 UA 지역 기준 유효한 번호
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "email": "a@b.com",
//!   "firstName": "Andrii",
//!   "lastName": "Heraskin",
//!   "birthDate": "2000-01-01",
//!   "address": "Peremohy Street 20",
//!   "phoneNumber": "+380678955568"
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};
use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::validation::{email_shape, not_blank, plausible_phone_number};

/// 검증 실패 보고 순서 (Rust 필드명, JSON 필드명)
///
/// 여러 필드가 동시에 실패하면 이 순서에서 가장 앞선 필드를 보고합니다.
const FIELD_ORDER: [(&str, &str); 5] = [
    ("email", "email"),
    ("first_name", "firstName"),
    ("last_name", "lastName"),
    ("birth_date", "birthDate"),
    ("phone_number", "phoneNumber"),
];

/// 사용자 생성/전체 수정 요청 DTO
///
/// `id`가 없으면 새 사용자로 저장되고, 있으면 해당 ID의 레코드를 통째로 교체합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[validate(
        required(message = "Email cannot be empty"),
        custom(function = "validate_email")
    )]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(
        required(message = "First name cannot be empty"),
        custom(function = "validate_first_name")
    )]
    #[serde(default)]
    pub first_name: Option<String>,

    #[validate(
        required(message = "Last name cannot be empty"),
        custom(function = "validate_last_name")
    )]
    #[serde(default)]
    pub last_name: Option<String>,

    #[validate(required(message = "Birth date cannot be empty"))]
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub address: Option<String>,

    #[validate(custom(function = "plausible_phone_number"))]
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl UserPayload {
    /// derive 검증을 수행하고, 실패 시 첫 번째 필드 에러를 `ValidationFailed`로 변환합니다.
    pub fn check_fields(&self) -> Result<(), AppError> {
        self.validate().map_err(|errors| first_field_error(&errors))
    }

    /// 검증을 통과한 요청을 엔티티로 변환합니다.
    ///
    /// `id`가 없으면 새 UUID(v4)를 부여합니다.
    /// 필수 필드가 비어 있으면 `ValidationFailed`를 반환합니다.
    pub fn into_user(self) -> Result<User, AppError> {
        Ok(User {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            email: required(self.email, "email", "Email cannot be empty")?,
            first_name: required(self.first_name, "firstName", "First name cannot be empty")?,
            last_name: required(self.last_name, "lastName", "Last name cannot be empty")?,
            birth_date: required(self.birth_date, "birthDate", "Birth date cannot be empty")?,
            address: self.address,
            phone_number: self.phone_number,
        })
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    not_blank(email).map_err(|e| e.with_message("Email cannot be empty".into()))?;
    email_shape(email)
}

fn validate_first_name(first_name: &str) -> Result<(), ValidationError> {
    not_blank(first_name).map_err(|e| e.with_message("First name cannot be empty".into()))
}

fn validate_last_name(last_name: &str) -> Result<(), ValidationError> {
    not_blank(last_name).map_err(|e| e.with_message("Last name cannot be empty".into()))
}

fn required<T>(value: Option<T>, field: &str, message: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::validation(field, message))
}

fn first_field_error(errors: &ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();

    FIELD_ORDER
        .iter()
        .find_map(|(rust_name, json_name)| {
            field_errors
                .get(*rust_name)
                .and_then(|list| list.first())
                .map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for field '{}'", json_name));
                    AppError::validation(*json_name, message)
                })
        })
        .unwrap_or_else(|| AppError::validation("user", errors.to_string()))
}
