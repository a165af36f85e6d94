//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션의 사용자 레코드를 조회하고 평점 필드를 부분 업데이트합니다.
//! 문서 키(`_id`)는 외부 가입 흐름에서 발급된 사용자 ID 문자열입니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::{Document, doc, to_document};

use super::UserStore;
use crate::db::Database;
use crate::domain::entities::users::RatingsUpdate;
use crate::errors::{AppError, AppResult, ErrorContext};

/// MongoDB 기반 사용자 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류, 업데이트 대상 없음
/// - **InternalError**: 업데이트 문서 BSON 직렬화 실패
#[derive(Clone)]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db
            .get_database()
            .collection::<T>(self.db.collection_name())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// `_id`만 투영하여 조회하므로 다른 필드의 형식과 무관하게 동작합니다.
    async fn exists(&self, uid: &str) -> AppResult<bool> {
        let found = self
            .collection::<Document>()
            .find_one(doc! { "_id": uid })
            .projection(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    /// `$set`으로 평점 필드 네 개만 덮어씁니다. 다른 필드는 건드리지 않습니다.
    async fn update_ratings(&self, uid: &str, update: &RatingsUpdate) -> AppResult<()> {
        let fields = to_document(update).context("평점 업데이트 문서 직렬화 실패")?;

        let result = self
            .collection::<Document>()
            .update_one(doc! { "_id": uid }, doc! { "$set": fields })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::DatabaseError(format!(
                "업데이트할 사용자 레코드가 없습니다: {}",
                uid
            )));
        }

        Ok(())
    }
}
