//! # Core Module
//!
//! 서비스 전반에서 공유하는 기반 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorResponse**: `timestamp`, `message`, `status` 형식의 에러 본문
//!
//! ### [`clock`] - 날짜 공급자
//! - **Clock**: 검증 시점의 "오늘"을 제공하는 trait
//! - **SystemClock**: 운영 환경용 구현
//! - **FixedClock**: 테스트용 고정 날짜 구현
//!
//! ## 의존성 구성
//!
//! 서비스와 리포지토리는 전역 컨테이너 없이 생성자 인자로 조립됩니다.
//!
//! ```rust,ignore
//! let repository = Arc::new(PgUserRepository::new(database.pool().clone()));
//! let service = UserService::new(repository, UserConfig::min_age(), Arc::new(SystemClock));
//!
//! App::new().app_data(web::Data::new(service))
//! ```

pub mod clock;
pub mod errors;

pub use clock::*;
pub use errors::*;
