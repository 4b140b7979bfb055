//! 요청 본문 필수 필드 검증
//!
//! 컨트롤러가 서비스를 호출하기 전에 실행하는 검증기입니다.
//! 검증 실패는 에러가 아니라 [`ValidationVerdict`] 값으로 표현됩니다.
//!
//! ```rust,ignore
//! use crate::utils::validation::{BodyValidator, RequiredFieldsValidator};
//!
//! let verdict = RequiredFieldsValidator::default().validate(&body);
//! if verdict.contain_errors() {
//!     println!("{:?}", verdict.fields_with_errors());
//! }
//! ```

use serde::Serialize;
use serde_json::Value;
use crate::domain::dto::users::request::RequestBody;

/// 사용자 요청에서 기본으로 요구하는 필드 (검사 순서 그대로)
pub const USER_REQUIRED_FIELDS: [&str; 2] = ["name", "email"];

/// 한 번의 검증 결과
///
/// `fields_with_errors`는 검증기에 설정된 필드 순서를 그대로 따릅니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    contain_errors: bool,
    fields_with_errors: Vec<String>,
}

impl ValidationVerdict {
    pub fn passed() -> Self {
        Self {
            contain_errors: false,
            fields_with_errors: Vec::new(),
        }
    }

    /// 실패 필드 목록으로 판정을 만듭니다. 목록이 비어 있으면 통과로 취급합니다.
    pub fn with_errors<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields_with_errors: Vec<String> = fields.into_iter().map(Into::into).collect();
        Self {
            contain_errors: !fields_with_errors.is_empty(),
            fields_with_errors,
        }
    }

    pub fn contain_errors(&self) -> bool {
        self.contain_errors
    }

    pub fn fields_with_errors(&self) -> &[String] {
        &self.fields_with_errors
    }

    pub fn into_fields_with_errors(self) -> Vec<String> {
        self.fields_with_errors
    }
}

/// 요청 본문 검증기
///
/// 컨트롤러 생성 시 주입되며, 테스트에서는 스텁으로 교체됩니다.
#[cfg_attr(test, mockall::automock)]
pub trait BodyValidator: Send + Sync {
    fn validate(&self, body: &RequestBody) -> ValidationVerdict;
}

/// 지정된 필드들이 존재하고 비어 있지 않은 JSON 문자열인지 검사합니다.
///
/// 숫자, `null`, 배열 등 문자열이 아닌 값은 모두 실패입니다.
/// 공백만 있는 문자열은 비어 있지 않은 것으로 봅니다.
#[derive(Debug, Clone)]
pub struct RequiredFieldsValidator {
    fields: Vec<String>,
}

impl RequiredFieldsValidator {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    fn is_non_empty_string(value: Option<&Value>) -> bool {
        matches!(value, Some(Value::String(s)) if !s.is_empty())
    }
}

impl Default for RequiredFieldsValidator {
    fn default() -> Self {
        Self::new(USER_REQUIRED_FIELDS)
    }
}

impl BodyValidator for RequiredFieldsValidator {
    fn validate(&self, body: &RequestBody) -> ValidationVerdict {
        ValidationVerdict::with_errors(
            self.fields
                .iter()
                .filter(|field| !Self::is_non_empty_string(body.get(field)))
                .cloned(),
        )
    }
}
