//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 조회, 저장, 부분 수정, 삭제, 생년월일 범위 검색을 담당하는
//! 핵심 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Validation    │  │   Persistence   │  │     Search      │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Field Rules   │  │ • Save/Replace  │  │ • Range Check   │  │
//! │  │ • Past Date     │  │ • Partial Patch │  │ • Paging        │  │
//! │  │ • Minimum Age   │  │ • Delete        │  │                 │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 UserRepository (trait object)                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 검증 순서
//!
//! 1. `UserPayload` 필드 규칙 (필수, 공백, 이메일, 전화번호) → `ValidationFailed`
//! 2. 생년월일 미래 날짜 금지 → `ValidationFailed` (`birthDate`)
//! 3. 최소 나이 → `UnderAge`
//!
//! 어느 단계든 실패하면 저장소는 호출되지 않습니다.

use std::sync::Arc;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::ValidationError;
use crate::{
    core::{
        clock::Clock,
        errors::{AppError, AppResult},
    },
    domain::{
        dto::{users::request::UserPayload, Page, PageRequest},
        entities::users::User,
    },
    repositories::users::UserRepository,
    validation::{minimum_age, past_or_present},
};

/// 생년월일 범위가 잘못되었을 때의 메시지
pub const INVALID_RANGE_MESSAGE: &str = "'From' date must be less than 'to'";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 모든 의존성은 생성자로 전달됩니다.
///
/// - `repository`: 사용자 저장소
/// - `min_age`: 저장 시 요구되는 최소 만 나이 (시작 시 한 번 읽은 설정값)
/// - `clock`: 나이 계산 기준이 되는 "오늘"
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(PgUserRepository::new(pool)),
///     UserConfig::min_age(),
///     Arc::new(SystemClock),
/// );
///
/// let saved = service.save(payload).await?;
/// let found = service.find_by_id(&saved.id.to_string()).await?;
/// ```
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    min_age: u32,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, min_age: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            min_age,
            clock,
        }
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    /// ID 문자열로 사용자를 조회합니다.
    ///
    /// # 에러
    ///
    /// * `InvalidIdentifier` - UUID 형식이 아닌 경우 (저장소 호출 없음)
    /// * `NotFound` - 해당 ID의 사용자가 없는 경우
    pub async fn find_by_id(&self, id: &str) -> AppResult<User> {
        let id = parse_id(id)?;

        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| {
                log::debug!("사용자 없음: {}", id);
                AppError::NotFound(format!("User with id='{}' not found", id))
            })
    }

    /// 사용자를 검증한 뒤 저장합니다.
    ///
    /// `id`가 없으면 새 ID를 부여해 삽입하고, 있으면 해당 레코드를 통째로 교체합니다.
    pub async fn save(&self, payload: UserPayload) -> AppResult<User> {
        payload.check_fields()?;
        let user = payload.into_user()?;

        self.check_birth_date(user.birth_date)?;

        let saved = self.repository.save(&user).await?;
        log::info!("✅ 사용자 저장 완료: {}", saved.id);

        Ok(saved)
    }

    /// ID 문자열로 사용자를 삭제합니다.
    ///
    /// 존재하지 않는 ID는 에러 없이 성공으로 처리됩니다.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id)?;

        self.repository.delete_by_id(&id).await?;
        log::info!("사용자 삭제 요청 처리: {}", id);

        Ok(())
    }

    /// 생년월일이 `[from, to]` 범위에 있는 사용자를 페이지 단위로 조회합니다.
    ///
    /// `from` 또는 `to`가 없거나 `from > to`이면 저장소를 호출하지 않고
    /// `InvalidRange`를 반환합니다.
    pub async fn find_all_by_birth_date_between(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        page: PageRequest,
    ) -> AppResult<Page<User>> {
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) if from <= to => (from, to),
            _ => {
                log::debug!("잘못된 생년월일 범위: from={:?}, to={:?}", from, to);
                return Err(AppError::InvalidRange(INVALID_RANGE_MESSAGE.to_string()));
            }
        };

        self.repository
            .find_all_by_birth_date_between(from, to, page)
            .await
    }

    /// 기존 사용자에 일부 필드만 병합하여 저장합니다.
    ///
    /// 알 수 없는 키와 `id`는 무시되며, 병합된 값은 다시 검증하지 않습니다.
    pub async fn partial_update(&self, id: &str, fields: &Map<String, Value>) -> AppResult<User> {
        let mut user = self.find_by_id(id).await?;

        user.apply_patch(fields)?;

        let saved = self.repository.save(&user).await?;
        log::info!("✅ 사용자 부분 수정 완료: {} ({}개 필드)", saved.id, fields.len());

        Ok(saved)
    }

    fn check_birth_date(&self, birth_date: NaiveDate) -> AppResult<()> {
        let today = self.clock.today();

        past_or_present(birth_date, today)
            .map_err(|e| AppError::validation("birthDate", message_of(&e)))?;

        minimum_age(birth_date, today, self.min_age).map_err(|e| {
            log::debug!("최소 나이 미달: {} (기준일 {})", birth_date, today);
            AppError::UnderAge(message_of(&e))
        })
    }
}

fn parse_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidIdentifier)
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|message| message.to_string())
        .unwrap_or_else(|| error.code.to_string())
}
