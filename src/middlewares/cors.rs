//! CORS 설정
//!
//! 웹 프론트엔드가 어느 도메인에서 배포되든 호출할 수 있도록 모든 Origin을
//! 허용합니다. 자격 증명을 허용하므로 응답에는 와일드카드 대신 요청의 Origin이
//! 그대로 담깁니다.

use actix_cors::Cors;

/// CORS 설정을 구성합니다
///
/// # Returns
///
/// * `Cors` - 구성된 CORS 미들웨어
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors();
/// App::new().wrap(cors)
/// ```
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
