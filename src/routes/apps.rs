use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait};
use serde::Deserialize;

use super::{json_body, non_blank, parse_id};
use crate::entities::app;
use crate::entities::app_category::AppCategory;
use crate::error::AppError;
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Build the app route group: `/apps/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_apps).post(create_app))
        .route("/categories", get(list_categories))
        .route("/{id}", get(get_app))
}

// ─────────────────────────────────────────────────────────────────────────────
// DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CreateAppRequest {
    name: Option<String>,
    description: Option<String>,
    rating: Option<f64>,
    image: Option<String>,
    category: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /apps` — List every app in store order.
async fn list_apps(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let apps = app::Entity::find().all(&state.db).await?;
    Ok(Json(apps))
}

/// `GET /apps/:id` — Get an app by ID.
async fn get_app(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&raw_id).map_err(|_| AppError::BadRequest("Invalid ID".to_string()))?;

    let found = match id {
        Some(id) => app::Entity::find_by_id(id).one(&state.db).await?,
        None => None,
    };

    found
        .map(Json)
        .ok_or_else(|| AppError::NotFound("App not found".to_string()))
}

/// `POST /apps` — Create an app. `name` and `category` are required.
async fn create_app(
    State(state): State<AppState>,
    payload: Result<Json<CreateAppRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = json_body(payload)?;

    let (Some(name), Some(category)) = (non_blank(req.name), non_blank(req.category)) else {
        return Err(AppError::BadRequest(
            "Name and category are required.".to_string(),
        ));
    };

    let category = AppCategory::from_str(&category).ok_or_else(|| {
        AppError::BadRequest(
            "Category must be one of: recommended, reference, productivity.".to_string(),
        )
    })?;

    let app = app::ActiveModel {
        name: Set(name),
        description: Set(req.description),
        rating: Set(req.rating),
        image: Set(req.image),
        category: Set(category.as_str().to_string()),
        ..Default::default()
    };

    let app = app
        .insert(&state.db)
        .await
        .map_err(|e| AppError::internal("Failed to create app", e))?;

    tracing::info!(app_id = app.id, %category, "App created");

    Ok((StatusCode::CREATED, Json(app)))
}

/// `GET /apps/categories` — The fixed app category set, independent of stored apps.
async fn list_categories() -> Json<[AppCategory; 3]> {
    Json(AppCategory::ALL)
}
