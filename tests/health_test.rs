mod common;

use axum::http::StatusCode;

use common::{body_json, get, test_app};

#[tokio::test]
async fn root_greeting() {
    let app = test_app().await;
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello from GameHub!");
}

#[tokio::test]
async fn health_reports_database() {
    let app = test_app().await;
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);

    let v = body_json(&body);
    assert_eq!(v["status"], "healthy");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
    // SQLite in-memory should report connected
    assert_eq!(v["database"]["connected"], true);
    assert!(v["database"]["latency_ms"].is_number());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = test_app().await;
    let (status, _body) = get(&app, "/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let app = test_app().await;
    let (status, _body) = common::post_json(&app, "/apps/categories", &serde_json::json!({})).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
