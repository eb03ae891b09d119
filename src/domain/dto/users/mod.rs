//! # 사용자 DTO 모듈
//!
//! - [`request`] - `UserPayload` (POST/PUT 본문)
//! - [`response`] - `Dto<T>` 응답 envelope

pub mod request;
pub mod response;
