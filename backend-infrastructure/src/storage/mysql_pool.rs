use std::time::Duration;

use anyhow::Result;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use backend_domain::StorageConfig;

use super::retry::{retry_startup, RetryPolicy};
use crate::utils::redact_url;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the connection pool, retrying while the server is still starting.
pub async fn connect_mysql(config: &StorageConfig) -> Result<MySqlPool> {
    info!("connecting to mysql at {}", redact_url(&config.database_url));
    let options = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT);
    let url = config.database_url.as_str();
    retry_startup("mysql", RetryPolicy::from_config(config), || {
        let options = options.clone();
        async move { Ok(options.connect(url).await?) }
    })
    .await
}

pub async fn ping_mysql(pool: &MySqlPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
