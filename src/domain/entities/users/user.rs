//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 생성 시점에는 `id`가 비어 있으며, 저장 후 MongoDB가 할당한 `ObjectId`가 채워집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 저장 전의 새 사용자를 만듭니다.
    pub fn new(name: String, email: String) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// 이름과 이메일을 갱신하는 `$set` 문서를 만듭니다.
    ///
    /// `updated_at`은 호출 시각으로 함께 갱신됩니다.
    pub fn update_document(name: &str, email: &str) -> Document {
        doc! {
            "name": name,
            "email": email,
            "updated_at": DateTime::now(),
        }
    }

    pub fn id_hex(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}
