mod apps;
mod games;
mod health;
mod root;

use axum::Json;
use axum::Router;
use axum::extract::rejection::JsonRejection;

use crate::error::AppError;
use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /` — plain-text greeting
/// - `GET /health` — health check with database connectivity
/// - `/games` — game catalog, `GET /games/categories` for distinct game categories
/// - `GET /categories` — alias of `/games/categories`
/// - `/apps` — app directory, `GET /apps/categories` for the fixed category set
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(health::router())
        .merge(games::categories_alias_router())
        .nest("/games", games::router())
        .nest("/apps", apps::router())
}

/// Parse an `{id}` path segment.
///
/// `Err` when the segment is not a base-10 integer. `Ok(None)` when it is an integer
/// outside the id column range, so no row can match it.
fn parse_id(raw: &str) -> Result<Option<i32>, std::num::ParseIntError> {
    let value = raw.parse::<i64>()?;
    Ok(i32::try_from(value).ok())
}

/// Unwrap a JSON body, reporting malformed payloads in the `{ "error": ... }` shape.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Trim surrounding whitespace; `None`, empty and whitespace-only strings all become `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
