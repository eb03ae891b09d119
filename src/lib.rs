//! 사용자 관리 서비스 백엔드
//!
//! 사용자 레코드의 생성, 조회, 전체/부분 수정, 삭제, 생년월일 범위 검색을
//! 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **필드 검증**: 이메일 형식, 공백 금지, 전화번호(UA), 미래 날짜 금지
//! - **최소 나이 정책**: 설정값(`USER_MIN_AGE`) 기반 만 나이 검증
//! - **페이지 검색**: 생년월일 범위 조회와 페이지 메타데이터
//! - **PostgreSQL**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod validation;
pub mod routes;
pub mod handlers;
