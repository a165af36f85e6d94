//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, Rate Limiting, 저장소 백엔드 설정
//! - [`credentials`] - 문서 저장소 접속 정보 (인라인 JSON 또는 로컬 파일)
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 저장소
//! export STORE_BACKEND="mongodb"                  # mongodb | memory
//! export DATABASE_CREDENTIALS='{"uri":"mongodb://localhost:27017"}'
//! export MEMORY_STORE_SEED_UIDS="u1,u2"           # memory 백엔드 전용
//! ```

pub mod data_config;
pub mod credentials;

pub use data_config::*;
pub use credentials::*;
