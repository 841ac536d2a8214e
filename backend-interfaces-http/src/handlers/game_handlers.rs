use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use backend_application::commands::game_commands;
use backend_application::queries::game_queries;
use backend_application::GameState;
use backend_domain::{Game, GameDraft};

use crate::error::HttpError;
use crate::middleware::parse_payload;

pub async fn create_game(
    State(state): State<GameState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Game>), HttpError> {
    let draft: GameDraft =
        parse_payload(&state.metrics, &headers, &body, state.config.max_body_bytes)?;
    let game = game_commands::create_game(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

pub async fn list_games(State(state): State<GameState>) -> Result<Json<Vec<Game>>, HttpError> {
    let games = game_queries::list_games(&state).await?;
    Ok(Json(games))
}

pub async fn get_game(
    State(state): State<GameState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Game>, HttpError> {
    let Path(id) = id?;
    let game = game_queries::get_game(&state, id).await?;
    Ok(Json(game))
}

pub async fn update_game(
    State(state): State<GameState>,
    id: Result<Path<i64>, PathRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Game>, HttpError> {
    let Path(id) = id?;
    let draft: GameDraft =
        parse_payload(&state.metrics, &headers, &body, state.config.max_body_bytes)?;
    let game = game_commands::update_game(&state, id, draft).await?;
    Ok(Json(game))
}

pub async fn delete_game(
    State(state): State<GameState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Game>, HttpError> {
    let Path(id) = id?;
    let game = game_commands::delete_game(&state, id).await?;
    Ok(Json(game))
}
