//! # Domain Models Module
//!
//! 도메인의 값 객체(Value Objects)를 정의하는 모듈입니다.
//! entities와는 구별되는 역할을 담당합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 문서 저장소에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `User`, `CatalogEntry`
//!
//! ### Models (`./`)
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 한 번 만들어지면 요청 처리 동안 바뀌지 않음
//! - **예시**: `MovieId`, `RatingValue`, `Ratings`, `RatedMovieDetail`
//!
//! ```text
//! Domain Layer
//! ├── entities/        ← 영속성 엔티티 (MongoDB 문서, 정적 카탈로그 항목)
//! ├── models/          ← 값 객체 (이 모듈)
//! └── dto/             ← 데이터 전송 객체
//! ```

pub mod ratings;

pub use ratings::*;
