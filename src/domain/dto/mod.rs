//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 타입들입니다.

pub mod users;

pub use users::*;
