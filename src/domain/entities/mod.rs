//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! - [`users`] - MongoDB `users` 컬렉션 문서와 매핑되는 사용자 레코드
//! - [`movies`] - 정적 카탈로그의 영화 항목
//!
//! ### MongoDB 통합
//! 사용자 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **문자열 키**: `_id`는 외부 가입 흐름이 발급한 사용자 ID 문자열
//! - **부분 매핑**: 평점 관련 필드만 매핑하고 나머지 필드는 무시

pub mod users;
pub mod movies;

pub use users::*;
pub use movies::*;
