//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! PostgreSQL `users` 테이블을 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **트레이트 기반 추상화**: 서비스는 [`UserRepository`] 트레이트에만 의존
//! - **명시적 의존성 주입**: 생성자로 커넥션 풀을 전달
//! - **Upsert 저장**: 같은 ID가 이미 있으면 레코드 전체를 교체
//! - **페이지 검색**: 생년월일 범위 조회 결과를 `LIMIT/OFFSET`으로 분할

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;
use crate::core::errors::AppResult;
use crate::domain::dto::{Page, PageRequest};
use crate::domain::entities::users::User;

/// 사용자 저장소 추상화
///
/// 모든 메서드는 `AppResult<T>`를 반환하며, 저장소 장애는
/// `AppError::DatabaseError`로 전달됩니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID로 사용자를 조회합니다. 없으면 `Ok(None)`을 반환합니다.
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>>;

    /// 사용자를 저장합니다.
    ///
    /// 같은 ID의 레코드가 있으면 모든 필드를 교체하고, 없으면 새로 삽입합니다.
    async fn save(&self, user: &User) -> AppResult<User>;

    /// ID로 사용자를 삭제합니다. 존재하지 않는 ID도 성공으로 처리합니다.
    async fn delete_by_id(&self, id: &Uuid) -> AppResult<()>;

    /// `from <= birth_date <= to`인 사용자를 생년월일 오름차순으로 한 페이지 조회합니다.
    async fn find_all_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: PageRequest,
    ) -> AppResult<Page<User>>;
}

/// PostgreSQL 기반 사용자 리포지토리
///
/// ## 테이블
///
/// - **테이블명**: `users`
/// - **기본 키**: `id` (UUID)
/// - **인덱스**: `birth_date` (범위 검색용)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::new().await?;
/// let repository = PgUserRepository::new(database.pool().clone());
///
/// let saved = repository.save(&user).await?;
/// let found = repository.find_by_id(&saved.id).await?;
/// ```
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, first_name, last_name, birth_date, address, phone_number \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn save(&self, user: &User) -> AppResult<User> {
        let saved = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, first_name, last_name, birth_date, address, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                 email = EXCLUDED.email, \
                 first_name = EXCLUDED.first_name, \
                 last_name = EXCLUDED.last_name, \
                 birth_date = EXCLUDED.birth_date, \
                 address = EXCLUDED.address, \
                 phone_number = EXCLUDED.phone_number \
             RETURNING id, email, first_name, last_name, birth_date, address, phone_number",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.birth_date)
        .bind(&user.address)
        .bind(&user.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn delete_by_id(&self, id: &Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            log::debug!("삭제할 사용자가 없음: {}", id);
        }

        Ok(())
    }

    async fn find_all_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: PageRequest,
    ) -> AppResult<Page<User>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE birth_date BETWEEN $1 AND $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await?;

        let content = sqlx::query_as::<_, User>(
            "SELECT id, email, first_name, last_name, birth_date, address, phone_number \
             FROM users WHERE birth_date BETWEEN $1 AND $2 \
             ORDER BY birth_date, id \
             LIMIT $3 OFFSET $4",
        )
        .bind(from)
        .bind(to)
        .bind(i64::from(page.size()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(content, page, u64::try_from(total).unwrap_or_default()))
    }
}
