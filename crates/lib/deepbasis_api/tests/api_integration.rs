//! Integration tests — build the router over an in-memory store and drive it
//! with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use deepbasis_api::{AppState, config::ApiConfig};
use deepbasis_core::auth::TokenCodec;
use deepbasis_core::user::MemoryUserStore;

const TEST_SECRET: &str = "test-secret";

/// Fresh router per test: no state shared across test cases.
fn test_app() -> Router {
    let config = ApiConfig {
        jwt_secret: TEST_SECRET.into(),
        // Minimum bcrypt cost keeps the tests fast.
        bcrypt_cost: 4,
    };
    let state = AppState::new(Arc::new(MemoryUserStore::new()), &config);
    deepbasis_api::router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

fn register_body(email: &str) -> Value {
    json!({"name": "Test", "email": email, "password": "pw123456"})
}

#[tokio::test]
async fn register_then_login_returns_token_pairs() {
    let app = test_app();

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/auth/register", register_body("a@x.com")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tokens = body_json(resp).await;
    assert!(tokens["accessToken"].is_string());
    assert!(tokens["refreshToken"].is_string());

    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({"email": "a@x.com", "password": "pw123456"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let tokens = body_json(resp).await;
    assert!(tokens["accessToken"].is_string());
    assert!(tokens["refreshToken"].is_string());
}

#[tokio::test]
async fn duplicate_registration_is_a_400() {
    let app = test_app();

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/auth/register", register_body("a@x.com")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(json_request("POST", "/auth/register", register_body("a@x.com")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Email is already in use.");
}

#[tokio::test]
async fn login_failures_share_one_message() {
    let app = test_app();
    app.clone()
        .oneshot(json_request("POST", "/auth/register", register_body("a@x.com")))
        .await
        .unwrap();

    let unknown = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({"email": "nobody@x.com", "password": "pw123456"}),
        ))
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

    let wrong_pw = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({"email": "a@x.com", "password": "wrong-pw"}),
        ))
        .await
        .unwrap();
    assert_eq!(wrong_pw.status(), StatusCode::BAD_REQUEST);

    let a = body_json(unknown).await;
    let b = body_json(wrong_pw).await;
    assert_eq!(a["message"], b["message"]);
    assert_eq!(a["message"], "Invalid email or password.");
}

#[tokio::test]
async fn refresh_roundtrip_and_stale_token_rejection() {
    let app = test_app();

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/auth/register", register_body("a@x.com")))
        .await
        .unwrap();
    let tokens = body_json(resp).await;
    let refresh_token = tokens["refreshToken"].as_str().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/refresh-token",
            json!({"refreshToken": refresh_token}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // A correctly signed but expired token is rejected with the uniform message.
    let codec = TokenCodec::new(TEST_SECRET.as_bytes());
    let subject = codec.verify(refresh_token).unwrap().user_id;
    let stale = codec.issue(subject, chrono::Duration::seconds(-5)).unwrap();

    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth/refresh-token",
            json!({"refreshToken": stale}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Invalid refresh token.");
}

#[tokio::test]
async fn user_crud_roundtrip() {
    let app = test_app();

    // Create
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/users", register_body("a@x.com")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user = body_json(resp).await;
    let id = user["id"].as_str().unwrap().to_string();
    assert_eq!(user["email"], "a@x.com");
    // The hash never leaves the service.
    assert!(user.get("passwordHash").is_none());
    assert!(user["createdAt"].is_string());

    // Partial update: only name (and updatedAt) change.
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/users/{id}"),
            json!({"name": "Renamed"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["name"], "Renamed");
    assert_eq!(updated["email"], "a@x.com");

    // List
    let resp = app.clone().oneshot(get_request("/users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);

    // Delete, then fetch 404s.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/users/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(get_request(&format!("/users/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_user_responses_are_404() {
    let app = test_app();
    let id = uuid::Uuid::new_v4();

    let resp = app
        .clone()
        .oneshot(get_request(&format!("/users/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/users/{id}"),
            json!({"name": "X"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/users/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_ok_over_a_reachable_store() {
    let app = test_app();

    let resp = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["checks"]["database"], "ok");
}
