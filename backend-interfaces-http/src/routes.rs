pub mod analytics;
pub mod games;
pub mod ops;
pub mod orders;

pub use analytics::build_analytics_router;
pub use games::build_game_router;
pub use ops::ops_routes;
pub use orders::build_order_router;
