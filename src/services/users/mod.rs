//! 사용자 관리 서비스 모듈
//!
//! 사용자 레코드의 검증, 저장, 조회, 검색, 삭제를 담당합니다.

pub mod user_service;

pub use user_service::UserService;
