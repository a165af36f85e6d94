//! 평점 제출 응답 DTO

use serde::Serialize;

use crate::domain::models::ratings::RatedMovieDetail;

pub const RATINGS_SAVED_MESSAGE: &str = "Ratings saved successfully";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// 저장 성공 응답
///
/// ```json
/// { "message": "Ratings saved successfully", "details": [ ... ] }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct RatingsSavedResponse {
    pub message: &'static str,
    pub details: Vec<RatedMovieDetail>,
}

impl RatingsSavedResponse {
    pub fn new(details: Vec<RatedMovieDetail>) -> Self {
        Self {
            message: RATINGS_SAVED_MESSAGE,
            details,
        }
    }
}

/// 사용자 없음 응답
///
/// 에러 상태 코드가 아닌 정상(200) 응답의 본문으로 전달됩니다.
///
/// ```json
/// { "error": "User not found" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct UserNotFoundResponse {
    pub error: &'static str,
}

impl Default for UserNotFoundResponse {
    fn default() -> Self {
        Self {
            error: USER_NOT_FOUND_MESSAGE,
        }
    }
}
