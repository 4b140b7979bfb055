//! # Domain Layer Module
//!
//! 사용자 관리 도메인의 데이터 구조를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 영속 객체
//! └── dto       - 요청 본문, 사용자 응답, 응답 envelope
//!      │
//!      ▼
//! Service Layer
//!      │
//!      ▼
//! Repository Layer (MongoDB)
//! ```

pub mod dto;
pub mod entities;
