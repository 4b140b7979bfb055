//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 문서)
//! └── dto/          ← 요청 본문, 응답 envelope
//! ```
//!
//! 엔티티는 `serde`로 BSON 직렬화되며, `_id` 필드는 `Option<ObjectId>`로
//! 표현되어 저장 전에는 비어 있습니다.

pub mod users;
