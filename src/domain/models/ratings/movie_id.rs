//! 영화 ID 값 객체
//!
//! 평점 요청의 키는 문자열(`"3"`)로 들어오지만, 저장과 카탈로그 조회에는
//! 정수 ID를 사용합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 정수 영화 ID
///
/// JSON/BSON에서는 숫자 하나로 직렬화됩니다 (`"movieId": 3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl FromStr for MovieId {
    type Err = AppError;

    /// 평점 맵의 키를 정수 ID로 변환합니다.
    ///
    /// 앞뒤 공백은 무시하며 부호(`+`/`-`)와 앞자리 0을 허용합니다.
    /// 변환에 실패하면 문제의 키를 담은 `ValidationError`를 반환합니다.
    ///
    /// ```rust,ignore
    /// assert_eq!(" 07 ".parse::<MovieId>()?, MovieId(7));
    /// assert!("abc".parse::<MovieId>().is_err());
    /// ```
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        key.trim()
            .parse::<i64>()
            .map(MovieId)
            .map_err(|_| {
                AppError::ValidationError(format!("영화 ID는 정수여야 합니다: '{}'", key))
            })
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
