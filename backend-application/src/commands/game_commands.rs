use tracing::info;

use backend_domain::{Game, GameDraft};

use crate::{AppError, GameState};

const RESOURCE: &str = "Game";

pub async fn create_game(state: &GameState, draft: GameDraft) -> Result<Game, AppError> {
    let game = state
        .game_repo
        .create(&draft)
        .await
        .map_err(|err| AppError::storage(&state.metrics, "create game", err))?;
    state.metrics.record_success();
    info!(game_id = game.id, title = %game.title, "game created");
    Ok(game)
}

pub async fn update_game(state: &GameState, id: i64, draft: GameDraft) -> Result<Game, AppError> {
    let updated = state
        .game_repo
        .update_by_id(id, &draft)
        .await
        .map_err(|err| AppError::storage(&state.metrics, "update game", err))?;
    let Some(game) = updated else {
        return Err(AppError::not_found(&state.metrics, RESOURCE, id));
    };
    state.metrics.record_success();
    info!(game_id = game.id, "game updated");
    Ok(game)
}

pub async fn delete_game(state: &GameState, id: i64) -> Result<Game, AppError> {
    let deleted = state
        .game_repo
        .delete_by_id(id)
        .await
        .map_err(|err| AppError::storage(&state.metrics, "delete game", err))?;
    let Some(game) = deleted else {
        return Err(AppError::not_found(&state.metrics, RESOURCE, id));
    };
    state.metrics.record_success();
    info!(game_id = game.id, "game deleted");
    Ok(game)
}
