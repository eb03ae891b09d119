//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 필드 검증 규칙을 선언합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 필수 여부, 공백, 이메일, 전화번호 (`validator` derive)
//! 3. **날짜 검증**: 미래 날짜 금지, 최소 나이 (`UserService`에서 오늘 날짜 기준)

pub mod user_payload;

pub use user_payload::UserPayload;
