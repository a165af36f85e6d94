//! # 평점 제출 서비스 구현
//!
//! 사용자가 제출한 영화 평점을 사용자 레코드에 기록합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! SubmitRatingsRequest
//!        │
//!        ▼
//! ┌──────────────────┐   없음   ┌──────────────────────┐
//! │ 사용자 존재 확인  │ ───────▶ │ UserNotFound (쓰기 X) │
//! └──────────────────┘          └──────────────────────┘
//!        │ 있음
//!        ▼
//! ┌──────────────────┐   실패   ┌──────────────────────┐
//! │ 영화 ID 키 파싱   │ ───────▶ │ ValidationError (400) │
//! └──────────────────┘          └──────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ 카탈로그 조회     │  카탈로그에 없는 ID는 상세 목록에서 제외
//! └──────────────────┘
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ 평점 필드 덮어쓰기 │  hasRated, ratedMovies, ratings, ratedMoviesDetails
//! └──────────────────┘
//! ```
//!
//! 조회와 쓰기는 트랜잭션으로 묶이지 않습니다. 같은 사용자에 대한 동시 제출은
//! 마지막 쓰기가 남습니다.

use std::sync::Arc;

use log::{error, info, warn};

use crate::catalog::MovieCatalog;
use crate::domain::dto::ratings::request::SubmitRatingsRequest;
use crate::domain::entities::users::RatingsUpdate;
use crate::domain::models::ratings::{MovieId, RatedMovieDetail, RatingValue};
use crate::errors::AppResult;
use crate::repositories::users::UserStore;

/// 평점 제출 결과
///
/// 사용자 없음은 에러가 아닌 정상 결과로 취급되어 HTTP 200으로 응답됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// 저장 완료, 카탈로그 정보가 붙은 평점 목록
    Saved(Vec<RatedMovieDetail>),
    /// 사용자 레코드 없음, 쓰기를 수행하지 않음
    UserNotFound,
}

/// 평점 제출 비즈니스 로직 서비스
///
/// 저장소와 카탈로그는 `Arc<dyn ...>`로 주입되므로 MongoDB와 메모리 저장소,
/// 또는 테스트 더블을 같은 코드로 다룹니다.
#[derive(Clone)]
pub struct RatingService {
    user_store: Arc<dyn UserStore>,
    catalog: Arc<dyn MovieCatalog>,
}

impl RatingService {
    pub fn new(user_store: Arc<dyn UserStore>, catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            user_store,
            catalog,
        }
    }

    /// 평점을 제출합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 정수로 파싱되지 않는 영화 ID 키 (쓰기 없음)
    /// * `DatabaseError` - 사용자 조회 또는 평점 쓰기 실패
    pub async fn submit_ratings(
        &self,
        request: SubmitRatingsRequest,
    ) -> AppResult<SubmissionOutcome> {
        let SubmitRatingsRequest { uid, ratings } = request;

        let exists = self.user_store.exists(&uid).await.map_err(|e| {
            error!("사용자 조회 실패 (uid: {}): {}", uid, e);
            e
        })?;

        if !exists {
            info!("평점 제출 대상 사용자 없음: {}", uid);
            return Ok(SubmissionOutcome::UserNotFound);
        }

        let parsed = ratings.parse_movie_ids().map_err(|e| {
            warn!("평점 제출 거부 (uid: {}): {}", uid, e);
            e
        })?;

        let rated_movies: Vec<MovieId> = parsed.iter().map(|(id, _)| *id).collect();
        let details = self.enrich(&parsed);

        let update = RatingsUpdate::new(rated_movies, ratings, details.clone());

        self.user_store
            .update_ratings(&uid, &update)
            .await
            .map_err(|e| {
                error!(
                    "평점 저장 실패 (uid: {}, 조회와 변환은 성공): {}",
                    uid, e
                );
                e
            })?;

        info!(
            "✅ 평점 저장 완료: uid={}, 평점 {}개, 카탈로그 일치 {}개",
            uid,
            update.rated_movies.len(),
            details.len()
        );

        Ok(SubmissionOutcome::Saved(details))
    }

    /// 카탈로그에 있는 영화만 골라 상세 정보를 붙입니다. 순서는 제출 순서를 따릅니다.
    fn enrich(&self, parsed: &[(MovieId, RatingValue)]) -> Vec<RatedMovieDetail> {
        parsed
            .iter()
            .filter_map(|(id, rating)| {
                self.catalog
                    .find(*id)
                    .map(|entry| RatedMovieDetail::new(*id, entry, *rating))
            })
            .collect()
    }
}
