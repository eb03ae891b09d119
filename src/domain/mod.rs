//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 엔티티와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속되는 사용자 레코드
//! └── DTOs          - 요청 본문, 응답 envelope, 페이지
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! `User` 엔티티와 부분 수정 병합 규칙을 제공합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! - `UserPayload`: 생성/전체 수정 요청 본문과 필드 검증 규칙
//! - `Dto<T>`: `{"data": ...}` 형태의 성공 응답 envelope
//! - `Page<T>` / `PageRequest`: 생년월일 범위 검색의 페이지 결과와 요청

pub mod entities;
pub mod dto;
