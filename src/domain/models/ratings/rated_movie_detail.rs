//! 카탈로그 정보가 붙은 평점 항목
//!
//! 사용자 문서의 `ratedMoviesDetails` 배열과 응답의 `details` 배열 원소입니다.

use serde::{Deserialize, Serialize};

use super::movie_id::MovieId;
use super::rating_value::RatingValue;
use crate::domain::entities::movies::CatalogEntry;

/// 평점 + 카탈로그 제목/장르
///
/// ```json
/// { "movieId": 1, "title": "Avengers: Endgame", "genre": "Acción", "rating": 4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedMovieDetail {
    pub movie_id: MovieId,
    pub title: String,
    pub genre: String,
    pub rating: RatingValue,
}

impl RatedMovieDetail {
    pub fn new(movie_id: MovieId, entry: &CatalogEntry, rating: RatingValue) -> Self {
        Self {
            movie_id,
            title: entry.title.to_string(),
            genre: entry.genre.to_string(),
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let entry = CatalogEntry { title: "Inception", genre: "Ciencia Ficción" };
        let detail = RatedMovieDetail::new(MovieId(3), &entry, RatingValue::Integer(5));

        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({ "movieId": 3, "title": "Inception", "genre": "Ciencia Ficción", "rating": 5 })
        );
    }
}
