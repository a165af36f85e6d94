//! Users Entity Module
//!
//! 사용자 레코드와 평점 필드 업데이트 묶음을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, RatingsUpdate};
//!
//! let mut user = User::new("u1");
//! user.apply_ratings(&RatingsUpdate::new(rated_movies, ratings, details));
//! assert!(user.has_rated);
//! ```

pub mod user;

pub use user::{RatingsUpdate, User};
