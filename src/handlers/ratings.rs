//! # Rating Submission HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/ratings/submit` | 평점 제출 | 200 OK |
//!
//! 사용자가 없을 때도 200으로 응답하고 본문의 `error` 필드로 알립니다.
//! 프론트엔드가 이 형태에 맞춰 동작하므로 상태 코드를 바꾸지 않습니다.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::domain::dto::ratings::request::SubmitRatingsRequest;
use crate::domain::dto::ratings::response::{RatingsSavedResponse, UserNotFoundResponse};
use crate::errors::AppError;
use crate::services::ratings::{RatingService, SubmissionOutcome};

/// 평점 제출 핸들러
///
/// # 엔드포인트
///
/// `POST /ratings/submit`
///
/// # 요청 본문
///
/// ```json
/// { "uid": "u1", "ratings": { "1": 4, "3": 5 } }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "message": "Ratings saved successfully",
///   "details": [
///     { "movieId": 1, "title": "Avengers: Endgame", "genre": "Acción", "rating": 4 },
///     { "movieId": 3, "title": "Inception", "genre": "Ciencia Ficción", "rating": 5 }
///   ]
/// }
/// ```
///
/// ## 사용자 없음 (200 OK)
/// ```json
/// { "error": "User not found" }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// { "error": "Validation error: ..." }
/// ```
///
/// ## 저장소 장애 (500 Internal Server Error)
/// ```json
/// { "error": "Database error: ..." }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/ratings/submit \
///   -H "Content-Type: application/json" \
///   -d '{"uid":"u1","ratings":{"1":4,"3":5}}'
/// ```
#[post("/submit")]
pub async fn submit_ratings(
    service: web::Data<RatingService>,
    payload: web::Json<SubmitRatingsRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    match service.submit_ratings(payload.into_inner()).await? {
        SubmissionOutcome::Saved(details) => {
            Ok(HttpResponse::Ok().json(RatingsSavedResponse::new(details)))
        }
        SubmissionOutcome::UserNotFound => {
            Ok(HttpResponse::Ok().json(UserNotFoundResponse::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use crate::catalog::StaticCatalog;
    use crate::domain::entities::users::{RatingsUpdate, User};
    use crate::domain::models::ratings::MovieId;
    use crate::errors::{AppError, AppResult};
    use crate::repositories::users::{InMemoryUserStore, UserStore};
    use crate::routes::configure_all_routes;
    use crate::services::ratings::RatingService;

    macro_rules! init_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(RatingService::new(
                        $store,
                        Arc::new(StaticCatalog::new()),
                    )))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    struct UnavailableStore;

    #[async_trait]
    impl UserStore for UnavailableStore {
        async fn exists(&self, _uid: &str) -> AppResult<bool> {
            Err(AppError::DatabaseError("server selection timeout".to_string()))
        }

        async fn update_ratings(&self, _uid: &str, _update: &RatingsUpdate) -> AppResult<()> {
            Err(AppError::DatabaseError("server selection timeout".to_string()))
        }
    }

    fn submit(body: Value) -> test::TestRequest {
        test::TestRequest::post().uri("/ratings/submit").set_json(body)
    }

    #[actix_web::test]
    async fn test_submit_returns_enriched_details() {
        let store = Arc::new(InMemoryUserStore::with_users(["u1"]));
        let app = init_app!(store.clone());

        let req = submit(json!({ "uid": "u1", "ratings": { "1": 4, "3": 5 } })).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "message": "Ratings saved successfully",
                "details": [
                    { "movieId": 1, "title": "Avengers: Endgame", "genre": "Acción", "rating": 4 },
                    { "movieId": 3, "title": "Inception", "genre": "Ciencia Ficción", "rating": 5 }
                ]
            })
        );

        let user = store.find_by_uid("u1").unwrap().unwrap();
        assert!(user.has_rated);
        assert_eq!(user.rated_movies, vec![MovieId(1), MovieId(3)]);
    }

    #[actix_web::test]
    async fn test_details_follow_request_key_order() {
        let store = Arc::new(InMemoryUserStore::with_users(["u1"]));
        let app = init_app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/ratings/submit")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"uid": "u1", "ratings": {"7": 2, "99": 3, "3": 5}}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["details"],
            json!([
                { "movieId": 7, "title": "Titanic", "genre": "Romance", "rating": 2 },
                { "movieId": 3, "title": "Inception", "genre": "Ciencia Ficción", "rating": 5 }
            ])
        );

        let user = store.find_by_uid("u1").unwrap().unwrap();
        assert_eq!(user.rated_movies, vec![MovieId(7), MovieId(99), MovieId(3)]);
    }

    #[actix_web::test]
    async fn test_decimal_rating_is_echoed() {
        let app = init_app!(Arc::new(InMemoryUserStore::with_users(["u1"])));

        let req = submit(json!({ "uid": "u1", "ratings": { "7": 3.5 } })).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["title"], "Titanic");
        assert_eq!(body["details"][0]["rating"], json!(3.5));
    }

    #[actix_web::test]
    async fn test_unknown_user_gets_soft_error() {
        let store = Arc::new(InMemoryUserStore::with_users(["u1"]));
        let app = init_app!(store.clone());

        let req = submit(json!({ "uid": "ghost", "ratings": { "1": 4 } })).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "User not found" }));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_malformed_bodies_are_rejected() {
        let app = init_app!(Arc::new(InMemoryUserStore::with_users(["u1"])));

        let cases = [
            json!({ "ratings": { "1": 4 } }),
            json!({ "uid": "", "ratings": { "1": 4 } }),
            json!({ "uid": "u1" }),
            json!({ "uid": "u1", "ratings": [4, 5] }),
            json!({ "uid": "u1", "ratings": { "1": "four" } }),
        ];

        for case in cases {
            let req = submit(case.clone()).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", case);

            let body: Value = test::read_body_json(resp).await;
            let message = body["error"].as_str().unwrap_or_default();
            assert!(message.starts_with("Validation error"), "body: {}", case);
        }
    }

    #[actix_web::test]
    async fn test_non_integer_key_names_the_key() {
        let store = Arc::new(InMemoryUserStore::with_users(["u1"]));
        let app = init_app!(store.clone());

        let req = submit(json!({ "uid": "u1", "ratings": { "matrix": 5 } })).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("matrix"));
        assert_eq!(store.find_by_uid("u1").unwrap(), Some(User::new("u1")));
    }

    #[actix_web::test]
    async fn test_store_failure_is_server_error() {
        let app = init_app!(Arc::new(UnavailableStore));

        let req = submit(json!({ "uid": "u1", "ratings": { "1": 4 } })).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Database error"));
    }
}
