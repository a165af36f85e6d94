//! # Domain Layer
//!
//! 평점 제출 서비스의 도메인 타입을 모아 둔 계층입니다.
//!
//! ```text
//! domain/
//! ├── entities/    ← 사용자 레코드, 카탈로그 항목
//! ├── models/      ← MovieId, RatingValue, Ratings, RatedMovieDetail
//! └── dto/         ← 요청/응답 본문
//! ```

pub mod entities;
pub mod dto;
pub mod models;
