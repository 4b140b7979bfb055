//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성과 수정 비즈니스 로직을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::{MongoUserService, UserService};
//!
//! let service: Arc<dyn UserService> = Arc::new(MongoUserService::new(user_repo));
//! let user = service.create_user(body).await?;
//! ```

pub mod user_service;

pub use user_service::{MongoUserService, UserService};
