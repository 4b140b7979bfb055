//! HTTP 응답 envelope
//!
//! 컨트롤러가 돌려주는 JSON 응답의 공통 형태입니다.
//!
//! ```json
//! { "message": "User created", "responseObject": { "user": { ... } } }
//! { "message": "Error creating user", "error": "Error trying to save user" }
//! ```
//!
//! `responseObject`와 `error` 중 정확히 하나만 존재합니다.
//! 두 생성자 [`ResponseEnvelope::success`]와 [`ResponseEnvelope::failure`] 외에는
//! 값을 만들 방법을 열어두지 않습니다.

use serde::Serialize;

/// 성공 응답의 `responseObject` 내용
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPayload<U> {
    pub user: U,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<U> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_object: Option<UserPayload<U>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<U> ResponseEnvelope<U> {
    pub fn success(message: impl Into<String>, user: U) -> Self {
        Self {
            message: message.into(),
            response_object: Some(UserPayload { user }),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response_object: None,
            error: Some(error.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn user(&self) -> Option<&U> {
        self.response_object.as_ref().map(|payload| &payload.user)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.response_object.is_some()
    }
}
