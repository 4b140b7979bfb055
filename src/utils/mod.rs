//! # Utilities Module
//!
//! - [`validation`] - 요청 본문 필수 필드 검증기와 검증 결과 타입

pub mod validation;
