//! # 평점 관련 응답 DTO 모듈
//!
//! - `RatingsSavedResponse` - 저장 성공, 카탈로그 정보가 붙은 평점 목록 포함
//! - `UserNotFoundResponse` - 사용자 없음 (HTTP 200, 본문의 `error` 필드로 전달)

pub mod ratings_response;

pub use ratings_response::{RatingsSavedResponse, UserNotFoundResponse};
