//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 의존성을 전달받아 구성되며, `main`에서 한 번 만들어
//! `web::Data`로 핸들러에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(repository, UserConfig::min_age(), Arc::new(SystemClock));
//! ```

pub mod users;
