//! User Entity Implementation
//!
//! 문서 저장소(`users` 컬렉션)의 사용자 레코드 중 이 서비스가 다루는 부분입니다.
//! 사용자 레코드는 외부 가입 흐름에서 만들어지며, 이 서비스는 평점 관련
//! 네 개 필드만 읽고 씁니다. 그 밖의 필드는 역직렬화 시 무시됩니다.

use serde::{Deserialize, Serialize};

use crate::domain::models::ratings::{MovieId, RatedMovieDetail, Ratings};

/// 사용자 레코드
///
/// ```json
/// {
///   "_id": "u1",
///   "hasRated": true,
///   "ratedMovies": [1, 3],
///   "ratings": { "1": 4, "3": 5 },
///   "ratedMoviesDetails": [ { "movieId": 1, "title": "...", "genre": "...", "rating": 4 } ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 사용자 식별자 (문서 키)
    #[serde(rename = "_id")]
    pub id: String,
    /// 평점 제출 여부
    #[serde(default)]
    pub has_rated: bool,
    /// 평점을 매긴 영화 ID 목록 (제출 순서)
    #[serde(default)]
    pub rated_movies: Vec<MovieId>,
    /// 제출된 평점 원본
    #[serde(default)]
    pub ratings: Ratings,
    /// 카탈로그 정보가 붙은 평점 목록
    #[serde(default)]
    pub rated_movies_details: Vec<RatedMovieDetail>,
}

impl User {
    /// 아직 평점을 제출하지 않은 사용자 레코드를 만듭니다.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// 평점 필드 업데이트를 적용합니다. 기존 평점과 병합하지 않고 덮어씁니다.
    pub fn apply_ratings(&mut self, update: &RatingsUpdate) {
        self.has_rated = update.has_rated;
        self.rated_movies = update.rated_movies.clone();
        self.ratings = update.ratings.clone();
        self.rated_movies_details = update.rated_movies_details.clone();
    }
}

/// 사용자 레코드에 덮어쓸 평점 필드 묶음
///
/// 저장소에는 이 네 필드만 부분 업데이트(`$set`)로 전달됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsUpdate {
    pub has_rated: bool,
    pub rated_movies: Vec<MovieId>,
    pub ratings: Ratings,
    pub rated_movies_details: Vec<RatedMovieDetail>,
}

impl RatingsUpdate {
    pub fn new(
        rated_movies: Vec<MovieId>,
        ratings: Ratings,
        rated_movies_details: Vec<RatedMovieDetail>,
    ) -> Self {
        Self {
            has_rated: true,
            rated_movies,
            ratings,
            rated_movies_details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unrated_user_deserializes_with_defaults() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "email": "someone@example.com",
            "displayName": "Someone"
        }))
        .unwrap();

        assert_eq!(user, User::new("u1"));
        assert!(!user.has_rated);
    }

    #[test]
    fn test_update_serializes_only_rating_fields() {
        let update = RatingsUpdate::new(
            vec![MovieId(99)],
            [("99", 3i64)].into_iter().collect(),
            vec![],
        );

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "hasRated": true,
                "ratedMovies": [99],
                "ratings": { "99": 3 },
                "ratedMoviesDetails": []
            })
        );
    }

    #[test]
    fn test_apply_ratings_overwrites_previous_submission() {
        let mut user = User::new("u1");
        user.apply_ratings(&RatingsUpdate::new(
            vec![MovieId(1)],
            [("1", 5i64)].into_iter().collect(),
            vec![],
        ));
        user.apply_ratings(&RatingsUpdate::new(
            vec![MovieId(2)],
            [("2", 4i64)].into_iter().collect(),
            vec![],
        ));

        assert_eq!(user.rated_movies, vec![MovieId(2)]);
        assert_eq!(user.ratings.keys().collect::<Vec<_>>(), vec!["2"]);
    }
}
