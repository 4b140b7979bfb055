//! 통합 테스트 공용 픽스처와 서비스 테스트 더블

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use user_service_backend::{
    core::errors::AppError,
    domain::dto::users::{request::RequestBody, response::UserResponse},
    services::users::UserService,
};

pub mod fixtures {
    use super::*;

    pub fn default_request_body() -> RequestBody {
        RequestBody::new()
            .with("name", "Jane")
            .with("email", "jane@x.com")
    }

    pub fn default_user() -> UserResponse {
        UserResponse {
            id: "64b7f0c2a1b2c3d4e5f60718".to_string(),
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    pub fn updated_user() -> UserResponse {
        UserResponse {
            name: "Jane Doe".to_string(),
            updated_at: "2024-02-01T00:00:00Z".to_string(),
            ..default_user()
        }
    }
}

/// 미리 정한 결과를 돌려주고 호출 내역을 기록하는 서비스 더블
pub struct StubUserService {
    outcome: Result<UserResponse, String>,
    create_calls: Mutex<Vec<RequestBody>>,
    update_calls: Mutex<Vec<RequestBody>>,
}

impl StubUserService {
    pub fn resolving(user: UserResponse) -> Arc<Self> {
        Arc::new(Self::with_outcome(Ok(user)))
    }

    pub fn rejecting(message: &str) -> Arc<Self> {
        Arc::new(Self::with_outcome(Err(message.to_string())))
    }

    fn with_outcome(outcome: Result<UserResponse, String>) -> Self {
        Self {
            outcome,
            create_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn create_calls(&self) -> Vec<RequestBody> {
        self.create_calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<RequestBody> {
        self.update_calls.lock().unwrap().clone()
    }

    fn result(&self) -> Result<UserResponse, AppError> {
        self.outcome
            .clone()
            .map_err(AppError::DatabaseError)
    }
}

#[async_trait]
impl UserService for StubUserService {
    async fn create_user(&self, body: RequestBody) -> Result<UserResponse, AppError> {
        self.create_calls.lock().unwrap().push(body);
        self.result()
    }

    async fn update_user(&self, body: RequestBody) -> Result<UserResponse, AppError> {
        self.update_calls.lock().unwrap().push(body);
        self.result()
    }
}

/// 라우트 전체와 주어진 서비스 더블로 테스트 앱을 초기화합니다.
macro_rules! init_app {
    ($service:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    user_service_backend::handlers::users::UserController::with_default_validator(
                        $service,
                    ),
                ))
                .app_data(user_service_backend::routes::json_config())
                .configure(user_service_backend::routes::configure_all_routes),
        )
        .await
    };
}
