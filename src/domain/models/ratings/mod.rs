//! 평점 도메인 값 객체
//!
//! - [`MovieId`] - 정수 영화 ID
//! - [`RatingValue`] - 숫자형 평점 값
//! - [`Ratings`] - 순서를 보존하는 영화 ID → 평점 맵
//! - [`RatedMovieDetail`] - 카탈로그 정보가 붙은 평점 항목

pub mod movie_id;
pub mod rating_value;
pub mod ratings;
pub mod rated_movie_detail;

pub use movie_id::MovieId;
pub use rating_value::RatingValue;
pub use ratings::Ratings;
pub use rated_movie_detail::RatedMovieDetail;
