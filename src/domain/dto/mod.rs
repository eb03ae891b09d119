//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 사용자 관련 DTO
//! │   ├── request/        # 요청 DTO (클라이언트 → 서버)
//! │   │   └── user_payload.rs
//! │   └── response/       # 응답 DTO (서버 → 클라이언트)
//! │       └── envelope.rs
//! └── page.rs             # 페이지 요청/결과
//! ```
//!
//! ## JSON 규칙
//!
//! - 필드 이름은 camelCase (`firstName`, `birthDate`)
//! - 날짜는 ISO 8601 (`YYYY-MM-DD`)
//! - 성공 응답은 항상 `data` 필드 하나로 감쌉니다

pub mod page;
pub mod users;

pub use page::{Page, PageRequest};
