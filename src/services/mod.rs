//! 비즈니스 로직 계층
//!
//! 서비스는 전역 인스턴스 없이 생성자로 의존성을 주입받습니다.

pub mod users;
