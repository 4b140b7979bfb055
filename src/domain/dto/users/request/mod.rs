//! # 사용자 관련 요청 DTO 모듈
//!
//! - [`RequestBody`] - 스키마 없는 JSON 객체 그대로의 요청 본문
//! - [`UserFields`] - 서비스가 문서를 만들 때 쓰는 타입 있는 필드 (`validator` 검증)
//!
//! 컨트롤러는 `RequestBody`만 다루고, 필드 해석은 서비스에 맡깁니다.

pub mod request_body;
pub mod user_fields;

pub use request_body::RequestBody;
pub use user_fields::UserFields;
