//! Handler-level tests: drive the router with `oneshot` requests and assert
//! the normalizer's status codes and response envelopes.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use test_context::test_context;
use tower::ServiceExt;

use common::*;
use server_core::common::UserId;
use server_core::domains::auth::JwtService;
use server_core::kernel::{BaseGeocoder, MockGeocoder};
use server_core::server::build_app;

fn jwt_service() -> Arc<JwtService> {
    Arc::new(JwtService::new("test_secret", "test_issuer".to_string()))
}

fn app(ctx: &TestHarness, geocoder: Arc<dyn BaseGeocoder>) -> (Router, Arc<JwtService>) {
    let jwt = jwt_service();
    let router = build_app(ctx.deps_with_geocoder(geocoder), jwt.clone(), &[]);
    (router, jwt)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_endpoint_reports_healthy(ctx: &TestHarness) {
    let (router, _) = app(ctx, Arc::new(MockGeocoder::new()));

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_availability_without_token_is_unauthorized(ctx: &TestHarness) {
    let (router, _) = app(ctx, Arc::new(MockGeocoder::new()));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/scheduleavailabilities",
            serde_json::json!({
                "dayOfWeek": 2,
                "startsAt": "09:00:00",
                "endsAt": "17:00:00",
                "validFrom": "2026-01-05"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["isSuccessful"], false);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_availability_with_token_stamps_the_actor(ctx: &TestHarness) {
    let (router, jwt) = app(ctx, Arc::new(MockGeocoder::new()));
    let actor = unique_user_id();
    let token = jwt.create_token(actor, false).unwrap();

    let mut request = json_request(
        "POST",
        "/api/scheduleavailabilities",
        serde_json::json!({
            "dayOfWeek": 5,
            "startsAt": "08:30:00",
            "endsAt": "12:00:00",
            "validFrom": "2026-03-02"
        }),
    );
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["isSuccessful"], true);
    let id = body["item"].as_i64().expect("integer id") as i32;

    let created_by: i32 =
        sqlx::query_scalar("SELECT created_by FROM schedule_availabilities WHERE id = $1")
            .bind(id)
            .fetch_one(&ctx.db_pool)
            .await
            .unwrap();
    assert_eq!(UserId::from_raw(created_by), actor);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_missing_availability_is_a_generic_not_found(ctx: &TestHarness) {
    let (router, _) = app(ctx, Arc::new(MockGeocoder::new()));

    let response = router
        .oneshot(
            Request::get("/api/scheduleavailabilities/2000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["errors"][0], "Application resource not found.");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_therapist_without_location_returns_created(ctx: &TestHarness) {
    let geocoder = Arc::new(MockGeocoder::new());
    let (router, _) = app(ctx, geocoder.clone());
    let email = unique_email("api-create");

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/therapists",
            serde_json::json!({
                "email": email,
                "firstName": "Kim",
                "lastName": "Lee",
                "phone": "612-555-0199"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["isSuccessful"], true);
    assert!(body["item"].is_i64());
    assert!(geocoder.calls().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn invalid_therapist_payload_is_a_bad_request(ctx: &TestHarness) {
    let (router, _) = app(ctx, Arc::new(MockGeocoder::new()));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/therapists",
            serde_json::json!({
                "email": "not-an-email",
                "firstName": "Kim",
                "lastName": "Lee",
                "phone": "612-555-0199"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["isSuccessful"], false);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn geocode_failure_surfaces_location_invalid(ctx: &TestHarness) {
    let geocoder = Arc::new(MockGeocoder::new().with_failure("nothing matched"));
    let (router, _) = app(ctx, geocoder);
    let email = unique_email("api-geocode-fail");
    let line_one = unique_line_one("Api Geocode Fail");

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/therapists",
            serde_json::json!({
                "email": email,
                "firstName": "Kim",
                "lastName": "Lee",
                "phone": "612-555-0199",
                "location": {
                    "locationTypeId": 2,
                    "lineOne": line_one,
                    "city": "Minneapolis",
                    "zip": "55403",
                    "stateId": "MN-24"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["errors"][0], "Location is invalid.");
    assert_eq!(count_therapists_with_email(&email, &ctx.db_pool).await, 0);
}
