//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 요청/응답 본문과 Rust 타입 사이의 변환을 담당합니다.
//!
//! ```text
//! dto/
//! └── ratings/
//!     ├── request/     ← SubmitRatingsRequest
//!     └── response/    ← RatingsSavedResponse, UserNotFoundResponse
//! ```
//!
//! ### 변환 패턴
//! - **Request → 도메인**: 서비스 계층에서 `Ratings::parse_movie_ids` 등으로 변환
//! - **도메인 → Response**: `RatingsSavedResponse::new(details)`

pub mod ratings;

pub use ratings::*;
