//! 평점 제출 서비스 모듈

pub mod rating_service;

pub use rating_service::{RatingService, SubmissionOutcome};
