use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Deserialize;

use super::{json_body, non_blank, parse_id};
use crate::entities::game;
use crate::error::AppError;
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Build the game route group: `/games/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_games).post(create_game))
        .route("/categories", get(list_categories))
        .route("/{id}", get(get_game))
}

/// Top-level `/categories`, kept for clients of the un-namespaced path.
pub fn categories_alias_router() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}

// ─────────────────────────────────────────────────────────────────────────────
// DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CreateGameRequest {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    rating: Option<f64>,
    imageurl: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /games` — List every game in store order.
async fn list_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = game::Entity::find().all(&state.db).await?;
    Ok(Json(games))
}

/// `GET /games/:id` — Get a game by ID.
async fn get_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&raw_id).map_err(|_| AppError::BadRequest("Invalid game ID".to_string()))?;

    let found = match id {
        Some(id) => game::Entity::find_by_id(id).one(&state.db).await?,
        None => None,
    };

    found
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
}

/// `POST /games` — Create a game. Only `title` is required.
async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = json_body(payload)?;

    let title = non_blank(req.title)
        .ok_or_else(|| AppError::BadRequest("Title is required.".to_string()))?;

    let game = game::ActiveModel {
        title: Set(title),
        description: Set(req.description),
        category: Set(req.category),
        rating: Set(req.rating),
        imageurl: Set(req.imageurl),
        ..Default::default()
    };

    let game = game
        .insert(&state.db)
        .await
        .map_err(|e| AppError::internal("Failed to create game", e))?;

    tracing::info!(game_id = game.id, "Game created");

    Ok((StatusCode::CREATED, Json(game)))
}

/// `GET /games/categories` — Distinct, non-null game categories.
async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = game::Entity::find()
        .select_only()
        .column(game::Column::Category)
        .filter(game::Column::Category.is_not_null())
        .distinct()
        .order_by_asc(game::Column::Category)
        .into_tuple::<String>()
        .all(&state.db)
        .await?;

    Ok(Json(categories))
}
