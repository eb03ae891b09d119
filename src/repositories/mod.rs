//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 트레이트 객체(`Arc<dyn UserRepository>`)로 리포지토리를 전달받으며,
//! 운영 환경에서는 PostgreSQL 구현체를, 테스트에서는 mock 또는 메모리 구현체를 사용합니다.

pub mod users;
