//! 영화 평점 제출 서비스 백엔드
//!
//! 웹 프론트엔드에서 사용자가 매긴 영화 평점을 받아 사용자 레코드에 기록하는
//! Rust 기반 HTTP 서비스입니다.
//!
//! # Features
//!
//! - **평점 제출**: `POST /ratings/submit`
//! - **영화 카탈로그**: 7편의 고정 카탈로그로 제목/장르 정보 부여
//! - **MongoDB**: 사용자 레코드 저장 (메모리 저장소로 대체 가능)
//! - **명시적 DI**: `web::Data`로 서비스 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐      ┌─────────────────┐
//! │    Services     │ ───▶ │     Catalog     │ ← 고정 영화 카탈로그
//! └─────────────────┘      └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use movie_ratings_backend::catalog::StaticCatalog;
//! use movie_ratings_backend::repositories::users::InMemoryUserStore;
//! use movie_ratings_backend::services::ratings::RatingService;
//!
//! let service = RatingService::new(
//!     Arc::new(InMemoryUserStore::with_users(["u1"])),
//!     Arc::new(StaticCatalog::new()),
//! );
//! let outcome = service.submit_ratings(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod catalog;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
