pub mod analytics_commands;
pub mod game_commands;
pub mod order_commands;
