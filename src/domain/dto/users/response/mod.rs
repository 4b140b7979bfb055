//! # 사용자 관련 응답 DTO 모듈
//!
//! - [`UserResponse`] - 서비스가 돌려주는 사용자 정보 (`ObjectId`는 16진수 문자열)
//! - [`ResponseEnvelope`] - 성공/실패를 구분하는 공통 JSON 응답 래퍼
//!
//! 컨트롤러는 `UserResponse`의 내부 구조를 보지 않고 envelope에 그대로 담습니다.

pub mod envelope;
pub mod user_response;

pub use envelope::{ResponseEnvelope, UserPayload};
pub use user_response::UserResponse;
