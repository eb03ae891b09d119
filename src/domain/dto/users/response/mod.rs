//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 일관된 형태로 전달합니다.
//!
//! ## 응답 형식
//!
//! ### 단일 사용자
//! ```json
//! {
//!   "data": {
//!     "id": "0b0c5c8e-6a8f-4d6e-9f6e-3f1c2a7b9d10",
//!     "email": "a@b.com",
//!     "firstName": "Andrii",
//!     "lastName": "Heraskin",
//!     "birthDate": "2000-01-01",
//!     "address": null,
//!     "phoneNumber": "+380678955568"
//!   }
//! }
//! ```
//!
//! ### 페이지
//! ```json
//! { "data": { "content": [], "page": 0, "size": 10, "totalElements": 0, "totalPages": 0 } }
//! ```
//!
//! 에러 응답 형식은 [`crate::core::errors::ErrorResponse`]를 참고하세요.

pub mod envelope;

pub use envelope::Dto;
