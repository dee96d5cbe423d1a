use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}

/// `GET /` — Plain-text greeting.
async fn greeting() -> &'static str {
    "Hello from GameHub!"
}
