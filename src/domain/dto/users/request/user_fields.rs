//! 서비스 계층에서 사용하는 타입 있는 사용자 필드
//!
//! [`RequestBody`]를 `serde`로 역직렬화한 뒤 `validator`로 다시 한 번 검사합니다.
//! 컨트롤러를 거치지 않고 서비스를 직접 호출하는 경우에도 저장되는 문서가
//! 빈 이름/이메일을 갖지 않도록 합니다.

use serde::Deserialize;
use validator::Validate;
use crate::core::errors::AppError;
use super::request_body::RequestBody;

/// 생성/수정 요청에서 서비스가 읽는 필드
///
/// 알 수 없는 필드는 무시됩니다. `id`는 수정 요청에서만 사용됩니다.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct UserFields {
    #[serde(default)]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "name must be a non-empty string"))]
    pub name: String,

    #[validate(length(min = 1, message = "email must be a non-empty string"))]
    pub email: String,
}

impl UserFields {
    /// 요청 본문에서 필드를 추출하고 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드 누락, 타입 불일치, 빈 문자열
    pub fn from_body(body: &RequestBody) -> Result<Self, AppError> {
        let fields: UserFields = serde_json::from_value(body.clone().into_value())
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        fields
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(fields)
    }

    /// 수정 대상 ID를 요구합니다.
    pub fn require_id(&self) -> Result<&str, AppError> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::ValidationError("id is required to update a user".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_fields_and_ignores_unknown_ones() {
        let body = RequestBody::new()
            .with("name", "Jane")
            .with("email", "jane@x.com")
            .with("nickname", "jj");

        let fields = UserFields::from_body(&body).unwrap();

        assert_eq!(fields.name, "Jane");
        assert_eq!(fields.email, "jane@x.com");
        assert_eq!(fields.id, None);
    }

    #[test]
    fn test_missing_field_is_validation_error() {
        let body = RequestBody::new().with("name", "Jane");

        let err = UserFields::from_body(&body).unwrap_err();

        assert!(matches!(err, AppError::ValidationError(ref msg) if msg.contains("email")));
    }

    #[test]
    fn test_empty_field_is_validation_error() {
        let body = RequestBody::new().with("name", "").with("email", "jane@x.com");

        let err = UserFields::from_body(&body).unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_require_id() {
        let with_id = UserFields::from_body(
            &RequestBody::new()
                .with("id", "64b7f0c2a1b2c3d4e5f60718")
                .with("name", "Jane")
                .with("email", "jane@x.com"),
        )
        .unwrap();
        assert_eq!(with_id.require_id().unwrap(), "64b7f0c2a1b2c3d4e5f60718");

        let without_id = UserFields::from_body(
            &RequestBody::new().with("name", "Jane").with("email", "jane@x.com"),
        )
        .unwrap();
        assert!(without_id.require_id().is_err());
    }
}
