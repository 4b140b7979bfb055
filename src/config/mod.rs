//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 실행 환경
//! export ENVIRONMENT="development"   # development, production (기본값)
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service_dev"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.

pub mod data_config;

pub use data_config::*;
