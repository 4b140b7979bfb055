//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 문서 저장소로 사용합니다. 리포지토리는 `Arc<Database>`를 받아
//! 생성되며 서비스에 `Arc`로 공유됩니다.
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = Arc::new(UserRepository::new(database.clone()));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
