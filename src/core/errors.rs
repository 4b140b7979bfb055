//! # Application Error Handling System
//!
//! 사용자 관리 백엔드의 통합 에러 타입입니다.
//! `thiserror`로 에러 메시지를 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 `?` 연산자로 에러를 전파하면 프레임워크가 JSON 응답으로 변환합니다.
//!
//! ## 두 가지 에러 채널
//!
//! 컨트롤러는 에러를 두 채널로 구분합니다.
//!
//! | 채널 | 발생 시점 | HTTP 변환 주체 |
//! |------|-----------|----------------|
//! | 검증 실패 | 서비스 호출 전 (동기) | 이 모듈의 `ResponseError` 구현 (400) |
//! | 서비스 실패 | 서비스 future 결과 (비동기) | 컨트롤러 자체 (500 envelope) |
//!
//! 서비스 실패는 컨트롤러가 [`AppError::detail`]을 그대로 `error` 필드에 담아
//! 응답하므로, 이 모듈의 상태 코드 매핑은 검증 실패와 라우트 밖의 에러에만
//! 적용됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn rename(repo: &dyn UserStore, id: &str, name: &str, email: &str) -> AppResult<User> {
//!     repo.update(id, User::update_document(name, email))
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 사람이 읽을 수 있는 상세 메시지를 하나 가집니다.
/// `Display` 출력에는 분류 접두사가 붙고, [`AppError::detail`]은 접두사 없는
/// 원본 메시지를 돌려줍니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 분류 접두사 없이 원본 메시지를 반환합니다.
    ///
    /// 서비스 실패 envelope의 `error` 필드는 이 값을 그대로 사용합니다.
    ///
    /// ```rust,ignore
    /// let err = AppError::DatabaseError("Error trying to save user".into());
    /// assert_eq!(err.detail(), "Error trying to save user");
    /// assert_eq!(err.to_string(), "Database error: Error trying to save user");
    /// ```
    pub fn detail(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 응답 본문은 `{ "error": "<Display 출력>" }` 형태입니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 애플리케이션 결과 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
