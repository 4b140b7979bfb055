//! 사용자 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 클라이언트에 노출되는 사용자 정보
///
/// `ObjectId`는 16진수 문자열로, 타임스탬프는 RFC 3339 문자열로 변환됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, DateTime};

    #[test]
    fn test_from_user_converts_id_and_timestamps() {
        let id = ObjectId::new();
        let created = DateTime::from_millis(0);
        let user = User {
            id: Some(id),
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            created_at: created,
            updated_at: created,
        };

        let response = UserResponse::from(user);

        assert_eq!(response.id, id.to_hex());
        assert_eq!(response.name, "Jane");
        assert_eq!(response.created_at, "1970-01-01T00:00:00Z");
        assert_eq!(response.updated_at, response.created_at);
    }

    #[test]
    fn test_unsaved_user_has_empty_id() {
        let response = UserResponse::from(User::new("Jane".to_string(), "jane@x.com".to_string()));

        assert!(response.id.is_empty());
    }
}
