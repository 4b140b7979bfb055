//! 사용자 요청 본문
//!
//! 스키마가 고정되지 않은 JSON 객체를 그대로 보관합니다.
//! 어떤 필드를 요구하는지는 검증기가, 어떤 필드를 사용하는지는 서비스가 결정합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 필드 이름 → JSON 값 매핑으로 표현되는 요청 본문
///
/// 직렬화 형식은 내부 객체와 동일합니다 (`#[serde(transparent)]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestBody(Map<String, Value>);

impl RequestBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// 필드가 JSON 문자열일 때만 그 값을 돌려줍니다.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// 빌더 형태의 필드 추가. 테스트 픽스처 작성에 주로 사용됩니다.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for RequestBody {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_any_json_object() {
        let body: RequestBody =
            serde_json::from_value(json!({ "name": "Jane", "age": 31, "tags": ["a"] })).unwrap();

        assert_eq!(body.get_str("name"), Some("Jane"));
        assert_eq!(body.get("age"), Some(&json!(31)));
        assert_eq!(body.get_str("age"), None);
        assert_eq!(body.get_str("missing"), None);
    }

    #[test]
    fn test_rejects_non_object_payload() {
        assert!(serde_json::from_value::<RequestBody>(json!(["name"])).is_err());
        assert!(serde_json::from_value::<RequestBody>(json!("name")).is_err());
    }

    #[test]
    fn test_serializes_transparently() {
        let body = RequestBody::new().with("email", "jane@x.com");

        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "email": "jane@x.com" }));
        assert_eq!(body.into_value(), json!({ "email": "jane@x.com" }));
    }
}
