use backend_domain::Game;

use crate::{AppError, GameState};

pub async fn list_games(state: &GameState) -> Result<Vec<Game>, AppError> {
    let games = state
        .game_repo
        .list_all()
        .await
        .map_err(|err| AppError::storage(&state.metrics, "list games", err))?;
    state.metrics.record_success();
    Ok(games)
}

pub async fn get_game(state: &GameState, id: i64) -> Result<Game, AppError> {
    let game = state
        .game_repo
        .get_by_id(id)
        .await
        .map_err(|err| AppError::storage(&state.metrics, "fetch game", err))?
        .ok_or_else(|| AppError::not_found(&state.metrics, "Game", id))?;
    state.metrics.record_success();
    Ok(game)
}
