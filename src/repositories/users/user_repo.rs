//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `users` 컬렉션을 문서 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **이메일 유니크성**: 생성/수정 전에 중복 이메일을 확인하고, 인덱스로도 보장
//! - **원자적 수정**: `find_one_and_update` + `ReturnDocument::After`
//! - **명시적 의존성**: `Arc<Database>`를 생성자로 주입
//!
//! 서비스는 구체 타입 대신 [`UserStore`] 트레이트에 의존하므로,
//! 테스트에서는 MongoDB 없이 저장소를 교체할 수 있습니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::user::User,
};

/// 서비스가 사용하는 사용자 저장소 인터페이스
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 할당된 ID가 채워진 사용자를 돌려줍니다.
    ///
    /// 이메일이 이미 사용 중이면 `ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// `$set` 문서로 사용자를 갱신합니다. 대상이 없으면 `Ok(None)`입니다.
    async fn update(&self, id: &str, update_doc: Document) -> AppResult<Option<User>>;
}

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// 모든 메서드는 `AppResult<T>` 타입을 반환하며,
/// 다음과 같은 에러 상황을 처리합니다:
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식
/// - **ConflictError**: 이메일 중복
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database.clone());
///
/// let created = repo.create(User::new("Jane".to_string(), "jane@x.com".to_string())).await?;
/// let id = created.id_hex().unwrap();
///
/// let update = User::update_document("Jane Doe", "jane@x.com");
/// let updated = repo.update(&id, update).await?;
/// ```
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION_NAME)
    }

    /// 16진수 문자열을 `ObjectId`로 변환합니다.
    pub fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError(format!("Invalid user id: {}", id)))
    }

    /// 이메일 주소로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. `email` 유니크 인덱스 (`email_unique`)
    /// 2. `created_at` 내림차순 인덱스 (`created_at_desc`)
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 존재하면 아무 일도 일어나지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// 새 사용자 생성
    ///
    /// 이메일이 이미 사용 중이면 `ConflictError`를 반환합니다.
    /// 성공 시 MongoDB가 할당한 ID가 채워진 사용자를 돌려줍니다.
    async fn create(&self, mut user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("Email already in use".to_string()));
        }

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("Inserted id is not an ObjectId".to_string())
        })?;
        user.id = Some(inserted_id);

        Ok(user)
    }

    /// 사용자 정보 부분 업데이트
    ///
    /// `$set`으로 지정된 필드만 바꾸고 변경 후 문서를 반환합니다.
    /// 다른 사용자가 같은 이메일을 쓰고 있으면 `ConflictError`를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 업데이트된 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    async fn update(&self, id: &str, update_doc: Document) -> AppResult<Option<User>> {
        let object_id = Self::parse_id(id)?;

        if let Ok(email) = update_doc.get_str("email") {
            if let Some(existing) = self.find_by_email(email).await? {
                if existing.id != Some(object_id) {
                    return Err(AppError::ConflictError("Email already in use".to_string()));
                }
            }
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_hex_object_id() {
        let id = ObjectId::new();

        assert_eq!(UserRepository::parse_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = UserRepository::parse_id("not-an-id").unwrap_err();

        assert!(matches!(err, AppError::ValidationError(ref msg) if msg.contains("not-an-id")));
    }
}
