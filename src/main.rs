//! 영화 평점 제출 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 초기화합니다.
//! 사용자 레코드 저장소를 연결한 뒤 평점 제출 REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use movie_ratings_backend::catalog::{MovieCatalog, StaticCatalog};
use movie_ratings_backend::config::{RateLimitConfig, ServerConfig, StoreBackend, StoreCredentials};
use movie_ratings_backend::db::Database;
use movie_ratings_backend::middlewares::configure_cors;
use movie_ratings_backend::repositories::users::{InMemoryUserStore, UserRepository, UserStore};
use movie_ratings_backend::routes::configure_all_routes;
use movie_ratings_backend::services::ratings::RatingService;

/// 미들웨어와 라우트가 등록된 `App`을 만듭니다.
///
/// 마지막에 wrap한 미들웨어가 가장 바깥에서 먼저 요청을 받습니다.
/// 요청 순서: Rate Limiting → CORS → Logger → NormalizePath
macro_rules! build_app {
    ($governor_conf:expr, $rating_service:expr) => {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .wrap(configure_cors())
            .wrap(Governor::new($governor_conf))
            .app_data($rating_service)
            // 라우트 설정
            .configure(configure_all_routes)
    };
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 영화 평점 서비스 시작중...");

    // 데이터 스토어 초기화
    let user_store = initialize_user_store().await?;

    let catalog = Arc::new(StaticCatalog::new());
    info!("🎬 영화 카탈로그 로드됨: {}편", catalog.len());

    let rating_service = web::Data::new(RatingService::new(user_store, catalog));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(rating_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(rating_service: web::Data<RatingService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 평점 제출: POST http://{}/ratings/submit", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값은 허용되지 않음)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || build_app!(&governor_conf, rating_service.clone()))
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=movie_ratings_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// `STORE_BACKEND`에 따라 사용자 레코드 저장소를 초기화합니다
///
/// MongoDB 저장소는 `DATABASE_CREDENTIALS` 또는 `serviceAccountKey.json`의
/// 접속 정보를 사용하며, 접속 정보가 없거나 연결에 실패하면 시작을 중단합니다.
///
/// # Errors
///
/// * 접속 정보 로드 실패
/// * MongoDB 연결 실패
async fn initialize_user_store() -> io::Result<Arc<dyn UserStore>> {
    match StoreBackend::from_env() {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let (credentials, source) = StoreCredentials::load().map_err(|e| {
                error!("❌ 데이터베이스 접속 정보 로드 실패: {}", e);
                io::Error::new(io::ErrorKind::NotFound, e.to_string())
            })?;
            info!("🔑 데이터베이스 접속 정보 로드됨: {}", source);

            let database = Database::connect(&credentials).await.map_err(|e| {
                error!("❌ 데이터베이스 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            Ok(Arc::new(UserRepository::new(Arc::new(database))))
        }
        StoreBackend::Memory { seed_uids } => {
            info!("🧪 메모리 저장소 사용: 사용자 {}명", seed_uids.len());
            Ok(Arc::new(InMemoryUserStore::with_users(seed_uids)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{Method, StatusCode, header};
    use actix_web::test;

    fn preflight() -> test::TestRequest {
        test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ratings/submit")
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .insert_header((header::ORIGIN, "https://movies.example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
    }

    macro_rules! status_of {
        ($app:expr, $req:expr) => {
            match test::try_call_service($app, $req.to_request()).await {
                Ok(resp) => resp.status(),
                Err(err) => err.as_response_error().status_code(),
            }
        };
    }

    #[actix_web::test]
    async fn test_rate_limiter_runs_before_cors() {
        let governor_conf = GovernorConfigBuilder::default()
            .requests_per_second(1)
            .burst_size(1)
            .use_headers()
            .finish()
            .unwrap();
        let rating_service = web::Data::new(RatingService::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(StaticCatalog::new()),
        ));
        let app = test::init_service(build_app!(&governor_conf, rating_service)).await;

        assert_eq!(status_of!(&app, preflight()), StatusCode::OK);
        // CORS가 바깥에 있으면 preflight는 Rate Limiting을 거치지 않는다
        assert_eq!(status_of!(&app, preflight()), StatusCode::TOO_MANY_REQUESTS);
    }
}
