//! # User Handlers
//!
//! 사용자 생성/수정 엔드포인트와 그 뒤의 컨트롤러입니다.
//!
//! ## 요청 처리 흐름
//!
//! ```text
//! Received → Validating ─┬─ 실패 → Err(ActionFailure::ValidationFailure)   (동기, 서비스 호출 없음)
//!                        └─ 통과 → Dispatched ─┬─ 성공 → 200 { message, responseObject: { user } }
//!                                              └─ 실패 → 500 { message, error }
//! ```
//!
//! 검증 실패와 서비스 실패는 서로 다른 채널로 전달됩니다.
//!
//! - **검증 실패**는 액션 메서드의 반환값(`Err`)으로 즉시 돌아오며, 어떤 비동기 작업도
//!   만들어지지 않습니다. 컨트롤러는 응답을 쓰지 않고, 프레임워크가
//!   [`ActionFailure`]의 `ResponseError` 구현으로 400 응답을 만듭니다.
//! - **서비스 실패**는 반환된 future 안에서 잡혀 500 envelope로 변환됩니다.
//!   future는 항상 응답으로 끝납니다.
//!
//! ## 엔드포인트
//!
//! | Method | Path | 성공 | 실패 |
//! |--------|------|------|------|
//! | POST | `/users` | 200 "User created" | 500 "Error creating user" |
//! | PUT | `/user` | 200 "User updated" | 500 "Error update user" |

use std::sync::Arc;
use actix_web::{http::StatusCode, post, put, web, HttpResponse, ResponseError};
use futures_util::future::{BoxFuture, FutureExt};
use log::{debug, error, warn};
use thiserror::Error;
use crate::{
    core::errors::AppError,
    domain::dto::users::{
        request::RequestBody,
        response::{ResponseEnvelope, UserResponse},
    },
    services::users::user_service::UserService,
    utils::validation::{BodyValidator, RequiredFieldsValidator},
};

/// 컨트롤러가 처리하는 사용자 변경 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Create,
    Update,
}

impl UserAction {
    pub fn success_message(self) -> &'static str {
        match self {
            UserAction::Create => "User created",
            UserAction::Update => "User updated",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            UserAction::Create => "Error creating user",
            UserAction::Update => "Error update user",
        }
    }
}

/// 액션 실패의 두 채널
#[derive(Debug, Error)]
pub enum ActionFailure {
    /// 필수 필드 검증 실패. 실패한 필드 이름을 검증기 순서대로 가집니다.
    #[error("The following fields are required and must be not empty strings: {}", .0.join(", "))]
    ValidationFailure(Vec<String>),

    /// 서비스 연산 실패. 메시지는 서비스 에러의 원본 메시지 그대로입니다.
    #[error("{}", .0.detail())]
    OperationFailure(AppError),
}

impl ResponseError for ActionFailure {
    fn status_code(&self) -> StatusCode {
        match self {
            ActionFailure::ValidationFailure(_) => StatusCode::BAD_REQUEST,
            ActionFailure::OperationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 검증을 통과한 뒤 서비스 결과를 기다리는 응답
pub type PendingResponse = BoxFuture<'static, HttpResponse>;

/// 요청 검증 → 서비스 호출 → HTTP 응답 변환을 담당하는 컨트롤러
///
/// 서비스와 검증기는 생성자로 주입됩니다. 요청 사이에 공유되는 가변 상태는 없습니다.
///
/// ```rust,ignore
/// let controller = UserController::with_default_validator(service);
///
/// match controller.create_user_action(body) {
///     Ok(pending) => pending.await,              // 200 또는 500
///     Err(failure) => failure.error_response(),  // 검증 실패
/// }
/// ```
pub struct UserController {
    service: Arc<dyn UserService>,
    validator: Arc<dyn BodyValidator>,
}

impl UserController {
    pub fn new(service: Arc<dyn UserService>, validator: Arc<dyn BodyValidator>) -> Self {
        Self { service, validator }
    }

    /// `name`, `email`을 요구하는 기본 검증기로 컨트롤러를 만듭니다.
    pub fn with_default_validator(service: Arc<dyn UserService>) -> Self {
        Self::new(service, Arc::new(RequiredFieldsValidator::default()))
    }

    pub fn create_user_action(&self, body: RequestBody) -> Result<PendingResponse, ActionFailure> {
        self.dispatch(UserAction::Create, body)
    }

    pub fn update_user_action(&self, body: RequestBody) -> Result<PendingResponse, ActionFailure> {
        self.dispatch(UserAction::Update, body)
    }

    fn dispatch(&self, action: UserAction, body: RequestBody) -> Result<PendingResponse, ActionFailure> {
        let verdict = self.validator.validate(&body);
        if verdict.contain_errors() {
            let failure = ActionFailure::ValidationFailure(verdict.into_fields_with_errors());
            warn!("{:?} rejected: {}", action, failure);
            return Err(failure);
        }

        debug!("{:?} dispatched to user service", action);

        let service = Arc::clone(&self.service);
        Ok(async move {
            let outcome = match action {
                UserAction::Create => service.create_user(body).await,
                UserAction::Update => service.update_user(body).await,
            };

            respond(action, outcome)
        }
        .boxed())
    }
}

/// 서비스 결과를 상태 코드와 envelope로 변환합니다.
///
/// 서비스 에러는 종류와 관계없이 500 envelope가 됩니다.
fn respond(action: UserAction, outcome: Result<UserResponse, AppError>) -> HttpResponse {
    match outcome {
        Ok(user) => HttpResponse::Ok().json(ResponseEnvelope::success(action.success_message(), user)),
        Err(err) => {
            let failure = ActionFailure::OperationFailure(err);
            error!("{:?} failed: {}", action, failure);
            HttpResponse::build(failure.status_code()).json(
                ResponseEnvelope::<UserResponse>::failure(action.failure_message(), failure.to_string()),
            )
        }
    }
}

/// 사용자 생성
///
/// `POST /users`
#[post("/users")]
pub async fn create_user(
    controller: web::Data<UserController>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, ActionFailure> {
    let pending = controller.create_user_action(body.into_inner())?;
    Ok(pending.await)
}

/// 사용자 수정
///
/// `PUT /user`. 대상은 본문의 `id` 필드로 지정합니다.
#[put("/user")]
pub async fn update_user(
    controller: web::Data<UserController>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, ActionFailure> {
    let pending = controller.update_user_action(body.into_inner())?;
    Ok(pending.await)
}
