pub mod cli;
pub mod context;
pub mod lifecycle;
pub mod logging;

pub use cli::Args;
pub use lifecycle::{launch, run_analytics, run_games, run_orders};
pub use logging::init_logging;
