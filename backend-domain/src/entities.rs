// Domain entities

pub mod analytics_event;
pub mod config;
pub mod game;
pub mod order;

pub use analytics_event::*;
pub use config::*;
pub use game::*;
pub use order::*;
