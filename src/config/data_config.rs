//! Data & Server Configuration
//!
//! 실행 환경, 서버 바인딩, MongoDB 연결, Rate Limiting, CORS 설정을
//! 환경 변수에서 읽어오는 설정 구조체들입니다.
//! 모든 값에는 개발 환경에서 안전한 기본값이 있습니다.

use std::env;
use std::str::FromStr;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 판별합니다.
    ///
    /// 값이 없거나 알 수 없는 값이면 `Production`으로 간주합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 포트 (`PORT`, 기본값 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 바인딩 호스트 (`HOST`, 기본값 "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (`SERVER_WORKERS`, 기본값 4)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 연결 URI (`MONGODB_URI`, 기본값 "mongodb://localhost:27017")
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름 (`DATABASE_NAME`, 기본값 "user_service_dev")
    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_service_dev".to_string())
    }
}

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
///
/// 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        )
    }

    /// 원시 문자열 값에서 설정을 만듭니다. 환경 변수와 무관하게 테스트할 수 있습니다.
    pub fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = match per_second {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|e| {
                log::error!(
                    "RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 {} 사용",
                    e,
                    Self::DEFAULT_PER_SECOND
                );
                Self::DEFAULT_PER_SECOND
            }),
            None => Self::DEFAULT_PER_SECOND,
        };

        let burst_size = match burst_size {
            Some(raw) => raw.parse::<u32>().unwrap_or_else(|e| {
                log::error!(
                    "RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 {} 사용",
                    e,
                    Self::DEFAULT_BURST_SIZE
                );
                Self::DEFAULT_BURST_SIZE
            }),
            None => Self::DEFAULT_BURST_SIZE,
        };

        Self {
            per_second,
            burst_size,
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: &'static str =
        "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080";

    /// 허용 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| Self::DEFAULT_ORIGINS.to_string()),
        )
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
