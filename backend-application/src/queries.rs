pub mod game_queries;
pub mod order_queries;
