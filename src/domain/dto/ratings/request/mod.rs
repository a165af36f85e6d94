//! # 평점 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`ratings`는 숫자 값을 가진 객체)
//! 2. **형식 검증**: `validator`를 통한 필드 규칙 (`uid` 비어 있지 않음)
//! 3. **비즈니스 검증**: 영화 ID 키의 정수 변환 (서비스 계층)
//!
//! 검증 실패는 모두 HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod submit_ratings;

pub use submit_ratings::SubmitRatingsRequest;
