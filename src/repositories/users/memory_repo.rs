//! 메모리 기반 사용자 저장소
//!
//! 테스트와 로컬 개발(`STORE_BACKEND=memory`)에서 MongoDB 대신 사용합니다.
//! 프로세스가 종료되면 데이터는 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::UserStore;
use crate::domain::entities::users::{RatingsUpdate, User};
use crate::errors::{AppError, AppResult, ErrorContext};

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 평점을 제출하지 않은 사용자들로 채운 저장소를 만듭니다.
    pub fn with_users<I, S>(uids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let users = uids
            .into_iter()
            .map(|uid| {
                let user = User::new(uid);
                (user.id.clone(), user)
            })
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }

    /// 저장된 사용자 레코드를 복사해 반환합니다. 없으면 `Ok(None)`.
    pub fn find_by_uid(&self, uid: &str) -> AppResult<Option<User>> {
        let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;
        Ok(users.get(uid).cloned())
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists(&self, uid: &str) -> AppResult<bool> {
        let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;
        Ok(users.contains_key(uid))
    }

    async fn update_ratings(&self, uid: &str, update: &RatingsUpdate) -> AppResult<()> {
        let mut users = self.users.write().context("사용자 저장소 쓰기 잠금 실패")?;
        let user = users.get_mut(uid).ok_or_else(|| {
            AppError::DatabaseError(format!("업데이트할 사용자 레코드가 없습니다: {}", uid))
        })?;
        user.apply_ratings(update);
        Ok(())
    }
}
