//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 [`UserStore`] trait에만 의존하고, 구현체는 프로세스 시작 시 주입됩니다.
//!
//! - [`UserRepository`](user_repo::UserRepository) - MongoDB `users` 컬렉션
//! - [`InMemoryUserStore`](memory_repo::InMemoryUserStore) - 테스트/로컬 개발용 메모리 저장소
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::with_users(["u1"]));
//! assert!(store.exists("u1").await?);
//! ```

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::UserRepository;
pub use memory_repo::InMemoryUserStore;

use async_trait::async_trait;

use crate::domain::entities::users::RatingsUpdate;
use crate::errors::AppResult;

/// 사용자 레코드 문서 저장소 인터페이스
///
/// 조회와 쓰기는 각각 독립적인 단일 호출이며 트랜잭션으로 묶이지 않습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자 레코드 존재 여부를 확인합니다.
    async fn exists(&self, uid: &str) -> AppResult<bool>;

    /// 기존 사용자 레코드의 평점 필드 네 개를 덮어씁니다.
    ///
    /// 레코드가 없으면 새로 만들지 않고 `DatabaseError`를 반환합니다.
    async fn update_ratings(&self, uid: &str, update: &RatingsUpdate) -> AppResult<()>;
}
