//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 사용되는 횡단 관심사 설정을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### CORS (`cors`)
//! - 모든 Origin, 메서드, 헤더 허용
//! - 자격 증명(쿠키 등) 포함 요청 허용
//!
//! # 적용 순서
//!
//! 마지막에 `wrap`한 미들웨어가 요청을 가장 먼저 받습니다.
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(middleware::NormalizePath::trim())  // 경로 정규화
//!     .wrap(middleware::Logger::default())      // 접근 로그
//!     .wrap(configure_cors())                   // CORS
//!     .wrap(Governor::new(&governor_conf))      // Rate Limiting (가장 바깥)
//! ```

pub mod cors;

pub use cors::configure_cors;
