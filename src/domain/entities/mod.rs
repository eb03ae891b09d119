//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티를 정의합니다.
//! 엔티티는 `users` 테이블 행과 1:1로 대응하며 `sqlx::FromRow`로 매핑됩니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (핵심 비즈니스 엔티티)
//! └── dto/          ← 데이터 전송 객체
//! ```

pub mod users;
