pub mod clickhouse_events;
pub mod mysql_games;
pub mod mysql_orders;

pub use clickhouse_events::ClickhouseEventRepository;
pub use mysql_games::MySqlGameRepository;
pub use mysql_orders::MySqlOrderRepository;
