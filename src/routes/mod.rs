//! API 라우트 설정 모듈
//!
//! 평점 제출 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `POST /ratings/submit` - 평점 제출
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(rating_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::config::StoreBackend;
use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 추출 실패(필드 누락, 타입 불일치, 잘못된 JSON)도 `ValidationError`로
/// 변환하여 모든 400 응답이 `{"error": "..."}` 형태를 갖도록 합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    // Health check endpoint
    cfg.service(health_check);

    configure_rating_routes(cfg);
}

/// 평점 관련 라우트를 설정합니다
///
/// 인증 미들웨어 없이 공개되며, 요청 본문의 `uid`로 사용자를 식별합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/ratings/submit \
///   -H "Content-Type: application/json" \
///   -d '{"uid":"u1","ratings":{"1":4}}'
/// ```
fn configure_rating_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/ratings").service(handlers::ratings::submit_ratings));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 저장소 연결 상태는 확인하지 않으며, `database`에는 `STORE_BACKEND`로 선택된
/// 백엔드 이름이 들어갑니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "movie_ratings_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "catalog": "Static",
///     "dependency_injection": "web::Data"
///   }
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "movie_ratings_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": StoreBackend::from_env().label(),
            "catalog": "Static",
            "dependency_injection": "web::Data"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::Value;

    use crate::catalog::StaticCatalog;
    use crate::repositories::users::InMemoryUserStore;
    use crate::services::ratings::RatingService;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "movie_ratings_service");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["features"]["database"], StoreBackend::from_env().label());
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_invalid_json_uses_error_shape() {
        let service = RatingService::new(
            Arc::new(InMemoryUserStore::with_users(["u1"])),
            Arc::new(StaticCatalog::new()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/ratings/submit")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
    }
}
