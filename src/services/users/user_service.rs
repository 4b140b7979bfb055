//! # 사용자 서비스
//!
//! 컨트롤러가 호출하는 사용자 생성/수정 비즈니스 로직입니다.
//!
//! [`UserService`] 트레이트는 컨트롤러가 의존하는 좁은 인터페이스이고,
//! [`MongoUserService`]는 [`UserStore`] 저장소를 사용하는 기본 구현입니다.
//! 테스트에서는 트레이트의 테스트 더블을 주입합니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::info;
use crate::{
    core::errors::AppError,
    domain::{
        dto::users::{
            request::{RequestBody, UserFields},
            response::UserResponse,
        },
        entities::users::user::User,
    },
    repositories::users::user_repo::UserStore,
};

/// 사용자 생성/수정 서비스 인터페이스
///
/// 두 연산 모두 요청 본문 전체를 받아 저장된 사용자를 돌려주거나 실패합니다.
/// 실패 메시지는 컨트롤러가 [`AppError::detail`]로 꺼내 응답에 그대로 싣습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, body: RequestBody) -> Result<UserResponse, AppError>;

    async fn update_user(&self, body: RequestBody) -> Result<UserResponse, AppError>;
}

/// MongoDB 리포지토리 기반 사용자 서비스
///
/// 운영에서는 `UserRepository`를, 테스트에서는 저장소 mock을 주입합니다.
pub struct MongoUserService {
    user_repo: Arc<dyn UserStore>,
}

impl MongoUserService {
    pub fn new(user_repo: Arc<dyn UserStore>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for MongoUserService {
    /// 새 사용자 생성
    ///
    /// # Errors
    ///
    /// * `ValidationError` - `name`/`email` 누락 또는 빈 문자열
    /// * `ConflictError` - 이미 사용 중인 이메일
    /// * `DatabaseError` - 저장 실패
    async fn create_user(&self, body: RequestBody) -> Result<UserResponse, AppError> {
        let fields = UserFields::from_body(&body)?;

        let created = self.user_repo
            .create(User::new(fields.name, fields.email))
            .await?;

        info!("사용자 생성 완료: {}", created.id_hex().unwrap_or_default());

        Ok(UserResponse::from(created))
    }

    /// 기존 사용자 수정
    ///
    /// 본문의 `id`로 대상을 찾고 `name`, `email`을 갱신합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - `id` 누락/형식 오류, 필드 누락
    /// * `NotFound` - 해당 ID의 사용자 없음
    /// * `ConflictError` - 다른 사용자가 사용 중인 이메일
    async fn update_user(&self, body: RequestBody) -> Result<UserResponse, AppError> {
        let fields = UserFields::from_body(&body)?;
        let id = fields.require_id()?;

        let updated = self.user_repo
            .update(id, User::update_document(&fields.name, &fields.email))
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        info!("사용자 수정 완료: {}", id);

        Ok(UserResponse::from(updated))
    }
}
