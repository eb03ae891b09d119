//! User Entity Implementation
//!
//! `users` 테이블의 한 행에 대응하는 사용자 엔티티입니다.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};

/// 사용자 엔티티
///
/// `id`는 최초 저장 시 서버에서 한 번 부여되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl User {
    /// 부분 수정 필드를 현재 엔티티에 병합합니다.
    ///
    /// - 알려진 camelCase 키만 반영하고, 알 수 없는 키와 `id`는 무시합니다.
    /// - 필수 필드에 `null`이나 잘못된 타입이 오면 해당 필드의 `ValidationFailed`를 반환합니다.
    /// - `address`, `phoneNumber`는 `null`로 비울 수 있습니다.
    ///
    /// 병합된 값에 대한 필드 검증은 다시 수행하지 않습니다.
    pub fn apply_patch(&mut self, fields: &Map<String, Value>) -> AppResult<()> {
        for (key, value) in fields {
            match key.as_str() {
                "email" => self.email = patch_value(key, value)?,
                "firstName" => self.first_name = patch_value(key, value)?,
                "lastName" => self.last_name = patch_value(key, value)?,
                "birthDate" => self.birth_date = patch_value(key, value)?,
                "address" => self.address = patch_value(key, value)?,
                "phoneNumber" => self.phone_number = patch_value(key, value)?,
                _ => log::debug!("부분 수정에서 알 수 없는 필드 무시: {}", key),
            }
        }
        Ok(())
    }
}

fn patch_value<T: DeserializeOwned>(key: &str, value: &Value) -> AppResult<T> {
    T::deserialize(value)
        .map_err(|_| AppError::validation(key, format!("Invalid value for field '{}'", key)))
}
