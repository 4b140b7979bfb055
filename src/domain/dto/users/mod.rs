//! # 사용자 DTO 모듈
//!
//! ```text
//! dto/users/
//! ├── request/    ← RequestBody, UserFields
//! └── response/   ← UserResponse, ResponseEnvelope
//! ```

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
