#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use tower::ServiceExt;

use sea_orm::DatabaseConnection;

use gamehub_api::state::AppState;

/// Build the app router backed by an in-memory `SQLite` database with migrations.
pub async fn test_app() -> Router {
    test_app_with_db().await.0
}

/// Like [`test_app`], also handing back the connection the router uses.
pub async fn test_app_with_db() -> (Router, DatabaseConnection) {
    let db = gamehub_api::db::connect("sqlite::memory:", 1)
        .await
        .unwrap_or_default();

    Migrator::up(&db, None).await.unwrap_or_default();

    let router = gamehub_api::routes::router().with_state(AppState { db: db.clone() });
    (router, db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();

    send(app, request).await
}

/// Test helper: POST a JSON body and return (status, body).
pub async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> (StatusCode, String) {
    post_raw(app, uri, &body.to_string()).await
}

/// Test helper: POST a raw body labelled as JSON and return (status, body).
pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_default();

    send(app, request).await
}

/// Parse a response body as JSON, `Null` if it is not JSON.
pub fn body_json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or(serde_json::Value::Null)
}
