//! 비즈니스 로직 계층
//!
//! 핸들러와 저장소 사이에서 도메인 규칙을 적용합니다. 서비스는 생성 시점에
//! 저장소와 카탈로그를 주입받으며, 전역 상태를 두지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::catalog::StaticCatalog;
//! use crate::repositories::users::InMemoryUserStore;
//! use crate::services::ratings::RatingService;
//!
//! let service = RatingService::new(
//!     Arc::new(InMemoryUserStore::with_users(["u1"])),
//!     Arc::new(StaticCatalog::new()),
//! );
//! ```

pub mod ratings;
