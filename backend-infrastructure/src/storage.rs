pub mod clickhouse_store;
pub mod mysql_pool;
pub mod retry;

pub use clickhouse_store::ClickhouseStore;
pub use mysql_pool::{connect_mysql, ping_mysql};
pub use retry::{retry_startup, RetryPolicy};
