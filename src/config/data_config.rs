//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 요청 속도 제한, 문서 저장소 백엔드 선택 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 잘못된 값은 기본값으로 대체됩니다.

use std::env;

use log::error;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0", 모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수 (`WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 100,
            burst_size: 200,
        }
    }
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok(),
            env::var("RATE_LIMIT_BURST_SIZE").ok(),
        )
    }

    /// 문자열 값으로부터 설정을 만듭니다. 파싱 실패 시 기본값을 사용합니다.
    pub fn from_values(per_second: Option<String>, burst_size: Option<String>) -> Self {
        let defaults = Self::default();

        let per_second = match per_second {
            Some(raw) => raw.parse::<u64>().ok().filter(|&v| v > 0).unwrap_or_else(|| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: '{}'. 기본값 {} 사용", raw, defaults.per_second);
                defaults.per_second
            }),
            None => defaults.per_second,
        };

        let burst_size = match burst_size {
            Some(raw) => raw.parse::<u32>().ok().filter(|&v| v > 0).unwrap_or_else(|| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: '{}'. 기본값 {} 사용", raw, defaults.burst_size);
                defaults.burst_size
            }),
            None => defaults.burst_size,
        };

        Self {
            per_second,
            burst_size,
        }
    }
}

/// 사용자 레코드를 보관할 문서 저장소 백엔드
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// MongoDB (운영 기본값)
    MongoDb,
    /// 프로세스 메모리 (로컬 개발용, 재시작 시 초기화)
    Memory {
        /// 시작 시 미리 만들어 둘 사용자 ID
        seed_uids: Vec<String>,
    },
}

impl StoreBackend {
    /// `STORE_BACKEND`와 `MEMORY_STORE_SEED_UIDS` 환경 변수로 백엔드를 결정합니다.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("STORE_BACKEND").ok().as_deref(),
            env::var("MEMORY_STORE_SEED_UIDS").ok().as_deref(),
        )
    }

    pub fn from_values(backend: Option<&str>, seed_uids: Option<&str>) -> Self {
        match backend.map(|b| b.trim().to_lowercase()).as_deref() {
            Some("memory") | Some("in-memory") => StoreBackend::Memory {
                seed_uids: seed_uids
                    .unwrap_or_default()
                    .split(',')
                    .map(str::trim)
                    .filter(|uid| !uid.is_empty())
                    .map(String::from)
                    .collect(),
            },
            Some("mongodb") | Some("mongo") | None => StoreBackend::MongoDb,
            Some(other) => {
                error!("알 수 없는 STORE_BACKEND: '{}'. mongodb 사용", other);
                StoreBackend::MongoDb
            }
        }
    }

    /// 헬스체크 응답에 표시할 백엔드 이름
    pub fn label(&self) -> &'static str {
        match self {
            StoreBackend::MongoDb => "MongoDB",
            StoreBackend::Memory { .. } => "Memory",
        }
    }
}
