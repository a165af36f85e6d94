//! 순서를 보존하는 평점 맵
//!
//! 클라이언트가 보낸 `{"<movie id>": <rating>, ...}` 객체를 받은 순서 그대로
//! 보관합니다. `ratedMovies`와 `ratedMoviesDetails`의 순서가 이 순서를 따릅니다.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::movie_id::MovieId;
use super::rating_value::RatingValue;
use crate::errors::AppResult;

/// 영화 ID 문자열 → 평점 값 맵 (삽입 순서 보존)
///
/// 같은 키가 두 번 나오면 마지막 값이 남고 위치는 처음 나온 자리를 유지합니다.
/// 비교(`==`)는 순서와 무관하게 키-값 쌍만 봅니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ratings(IndexMap<String, RatingValue>);

impl Ratings {
    pub fn new() -> Self {
        Self::default()
    }

    /// 키-값 쌍을 추가합니다. 이미 있는 키라면 값만 교체합니다.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RatingValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RatingValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 모든 키를 정수 영화 ID로 변환하여 값과 함께 반환합니다.
    ///
    /// 하나라도 정수로 변환되지 않으면 해당 키를 담은 `ValidationError`를 반환합니다.
    pub fn parse_movie_ids(&self) -> AppResult<Vec<(MovieId, RatingValue)>> {
        self.0
            .iter()
            .map(|(key, value)| key.parse::<MovieId>().map(|id| (id, *value)))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Ratings
where
    K: Into<String>,
    V: Into<RatingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ratings = Ratings::new();
        for (key, value) in iter {
            ratings.insert(key, value);
        }
        ratings
    }
}
