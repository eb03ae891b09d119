//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] 트레이트와 PostgreSQL 구현체 [`PgUserRepository`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::PgUserRepository;
//!
//! let repository = PgUserRepository::new(pool);
//! let user = repository.find_by_id(&user_id).await?;
//! ```

pub mod user_repo;

#[cfg(test)]
pub mod in_memory_user_repo;

pub use user_repo::{PgUserRepository, UserRepository};

#[cfg(test)]
pub use user_repo::MockUserRepository;
