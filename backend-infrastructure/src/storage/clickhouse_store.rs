use anyhow::Result;
use clickhouse::Client;
use tracing::info;

use backend_domain::StorageConfig;

use super::retry::{retry_startup, RetryPolicy};
use crate::utils::redact_url;

/// Shared ClickHouse handle. The client is created without a default
/// database so the database itself can be created on first start; tables
/// are always addressed as `database.table`.
#[derive(Clone)]
pub struct ClickhouseStore {
    client: Client,
    database: String,
}

impl ClickhouseStore {
    pub fn new(config: &StorageConfig) -> Self {
        let mut client = Client::default().with_url(&config.clickhouse_url);
        if let Some(user) = &config.clickhouse_user {
            client = client.with_user(user);
        }
        if let Some(password) = &config.clickhouse_password {
            client = client.with_password(password);
        }
        Self {
            client,
            database: config.clickhouse_database.clone(),
        }
    }

    /// Waits for the server to answer before handing out the store.
    pub async fn connect(config: &StorageConfig) -> Result<Self> {
        info!(
            "connecting to clickhouse at {}",
            redact_url(&config.clickhouse_url)
        );
        let store = Self::new(config);
        retry_startup("clickhouse", RetryPolicy::from_config(config), || store.probe()).await?;
        Ok(store)
    }

    pub async fn probe(&self) -> Result<()> {
        self.client
            .query("SELECT toUInt8(1)")
            .fetch_one::<u8>()
            .await?;
        Ok(())
    }

    pub async fn create_database(&self) -> Result<()> {
        let create_db = format!("CREATE DATABASE IF NOT EXISTS {}", self.database);
        self.client.query(&create_db).execute().await?;
        Ok(())
    }

    pub async fn execute(&self, sql: &str) -> Result<()> {
        self.client.query(sql).execute().await?;
        Ok(())
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn qualified(&self, table: &str) -> String {
        format!("{}.{}", self.database, table)
    }
}
