//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결을 설정하고 리포지토리 → 서비스 → 컨트롤러 순서로 의존성을 조립합니다.

use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use user_service_backend::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig};
use user_service_backend::db::Database;
use user_service_backend::handlers::users::UserController;
use user_service_backend::repositories::users::UserRepository;
use user_service_backend::routes::{configure_all_routes, json_config};
use user_service_backend::services::users::{MongoUserService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let (env_file, loaded) = load_env_file();
    init_logging();

    match loaded {
        Ok(path) => info!("{} 파일 로드 됨: {}", env_file, path.display()),
        Err(e) => warn!("{} 파일 로드 실패: {}", env_file, e),
    }

    info!("🚀 사용자 관리 서비스 시작중... (environment: {:?})", Environment::current());

    let controller = web::Data::new(build_controller().await?);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(controller).await
}

/// MongoDB 연결부터 컨트롤러까지 의존성을 조립합니다
///
/// 연결 실패나 인덱스 생성 실패는 `std::io::Error`로 변환되어 프로세스가 종료됩니다.
async fn build_controller() -> std::io::Result<UserController> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(
        Database::new()
            .await
            .map_err(|e| std::io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?,
    );

    let user_repo = Arc::new(UserRepository::new(database));
    user_repo
        .create_indexes()
        .await
        .map_err(|e| std::io::Error::other(format!("인덱스 생성 실패: {}", e)))?;

    info!("✅ 사용자 컬렉션 인덱스 준비 완료");

    let service: Arc<dyn UserService> = Arc::new(MongoUserService::new(user_repo));
    Ok(UserController::with_default_validator(service))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(controller: web::Data<UserController>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(controller.clone())
            .app_data(json_config())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// `PROFILE` 값에 해당하는 환경 설정 파일 이름
///
/// * `prod` - .env.prod
/// * `dev` - .env.dev (기본값)
/// * 기타 - .env
fn env_file_for_profile(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거가 초기화되기 전에 호출되므로 결과는 호출한 쪽에서 기록합니다.
fn load_env_file() -> (&'static str, Result<PathBuf, dotenv::Error>) {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_file = env_file_for_profile(&profile);

    (env_file, dotenv::from_filename(env_file))
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽어옵니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
