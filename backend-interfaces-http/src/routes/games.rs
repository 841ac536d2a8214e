use axum::routing::get;
use axum::Router;

use backend_application::GameState;

use crate::handlers::game_handlers;
use crate::routes::ops_routes;

pub fn build_game_router(state: GameState) -> Router {
    Router::new()
        .route(
            "/games",
            get(game_handlers::list_games).post(game_handlers::create_game),
        )
        .route(
            "/games/",
            get(game_handlers::list_games).post(game_handlers::create_game),
        )
        .route(
            "/games/:id",
            get(game_handlers::get_game)
                .put(game_handlers::update_game)
                .delete(game_handlers::delete_game),
        )
        .merge(ops_routes::<GameState>())
        .with_state(state)
}
