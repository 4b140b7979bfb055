//! # Routes Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트를 한 곳에서 등록합니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/health` | [`health_check`] |
//! | POST | `/users` | [`handlers::users::create_user`] |
//! | PUT | `/user` | [`handlers::users::update_user`] |
//!
//! 컨트롤러(`web::Data<UserController>`)는 호출하는 쪽에서 `app_data`로 등록해야 합니다.

use actix_web::web;
use serde_json::json;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// JSON 본문 추출 설정
///
/// 객체가 아니거나 파싱할 수 없는 본문은 컨트롤러에 도달하기 전에
/// 400 `{ "error": "..." }`로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = actix_web::HttpResponse::BadRequest().json(json!({
            "error": err.to_string()
        }));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_user)
        .service(handlers::users::update_user);
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        }
    }))
}
