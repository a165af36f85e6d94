//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문을 검증하고 서비스 결과를 HTTP 응답으로 변환하는 일만 하며,
//! 비즈니스 규칙은 서비스 계층에 있습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (웹 프론트엔드)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 평점 제출 로직                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 사용자 레코드 접근              ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 `web::Data<RatingService>`로 주입됩니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(rating_service))
//!     .configure(configure_all_routes)
//! ```
//!
//! ## 모듈 구성
//!
//! - **`ratings`**: 평점 제출 (`POST /ratings/submit`)

pub mod ratings;
