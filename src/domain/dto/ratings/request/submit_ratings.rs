//! 평점 제출 요청 DTO
//!
//! `POST /ratings/submit` 요청 본문의 구조와 검증 규칙을 정의합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::ratings::Ratings;

/// 평점 제출 요청
///
/// ```json
/// { "uid": "u1", "ratings": { "1": 4, "3": 5 } }
/// ```
///
/// - `ratings`가 객체가 아니거나 값이 숫자가 아니면 JSON 역직렬화 단계에서 거부됩니다.
/// - 키가 정수인지는 사용자 존재 확인 이후 서비스에서 검사합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitRatingsRequest {
    /// 사용자 ID (빈 문자열 불가)
    #[validate(length(min = 1, message = "uid는 비어 있을 수 없습니다"))]
    pub uid: String,

    /// 영화 ID 문자열 → 평점 값
    pub ratings: Ratings,
}
