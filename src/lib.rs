//! 사용자 관리 서비스 백엔드
//!
//! 사용자 생성/수정 API를 제공하는 Rust 기반 백엔드입니다.
//! 요청 본문을 검증하고, 서비스에 위임하고, 결과를 HTTP 상태 코드와
//! JSON envelope로 변환합니다.
//!
//! # Features
//!
//! - **요청 검증**: 필수 필드(`name`, `email`) 존재 및 비어 있지 않은 문자열 검사
//! - **사용자 관리**: 사용자 생성, 수정
//! - **MongoDB**: 사용자 문서 영구 저장
//! - **명시적 DI**: 서비스와 검증기를 컨트롤러 생성자로 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증 + 디스패치 + 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::handlers::users::UserController;
//! use user_service_backend::services::users::MongoUserService;
//!
//! let service = Arc::new(MongoUserService::new(user_repo));
//! let controller = UserController::with_default_validator(service);
//!
//! let response = controller.create_user_action(body)?.await;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
