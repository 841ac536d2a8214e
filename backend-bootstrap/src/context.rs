use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use backend_application::{AnalyticsState, GameState, Metrics, OrderState};
use backend_domain::ports::StorageConnector;
use backend_infrastructure::{
    connect_mysql, redact_url, AppConfig, ClickhouseEventRepository, ClickhouseStore,
    MySqlGameRepository, MySqlOrderRepository, ServiceKind,
};

async fn load_config(service: ServiceKind) -> Result<AppConfig> {
    let config = AppConfig::load().await.context("failed to load config")?;
    info!(
        service = service.name(),
        bind_addr = %config.bind_addr,
        max_body_bytes = config.max_body_bytes,
        request_timeout_seconds = config.request_timeout_seconds,
        "config loaded"
    );
    Ok(config)
}

/// Waits for ClickHouse and creates the event tables before serving.
pub async fn build_analytics_state() -> Result<AnalyticsState> {
    let service = ServiceKind::Analytics;
    let config = load_config(service).await?;
    let storage_config = config.to_storage_config(service);
    info!(
        clickhouse_url = %storage_config.clickhouse_url,
        clickhouse_database = %storage_config.clickhouse_database,
        clickhouse_user_set = storage_config.clickhouse_user.is_some(),
        clickhouse_password_set = storage_config.clickhouse_password.is_some(),
        "analytics storage"
    );

    let store = ClickhouseStore::connect(&storage_config).await?;
    let repo = Arc::new(ClickhouseEventRepository::new(store));
    repo.ensure_schema()
        .await
        .context("failed to create analytics tables")?;

    Ok(AnalyticsState {
        config: config.to_runtime_config(),
        storage: repo.clone(),
        event_repo: repo,
        metrics: Arc::new(Metrics::new(service.name())),
    })
}

pub async fn build_game_state() -> Result<GameState> {
    let service = ServiceKind::Games;
    let config = load_config(service).await?;
    let storage_config = config.to_storage_config(service);
    info!(database_url = %redact_url(&storage_config.database_url), "game storage");

    let pool = connect_mysql(&storage_config).await?;
    let repo = Arc::new(MySqlGameRepository::new(pool));
    repo.ensure_schema()
        .await
        .context("failed to create games table")?;

    Ok(GameState {
        config: config.to_runtime_config(),
        storage: repo.clone(),
        game_repo: repo,
        metrics: Arc::new(Metrics::new(service.name())),
    })
}

pub async fn build_order_state() -> Result<OrderState> {
    let service = ServiceKind::Orders;
    let config = load_config(service).await?;
    let storage_config = config.to_storage_config(service);
    info!(database_url = %redact_url(&storage_config.database_url), "order storage");

    let pool = connect_mysql(&storage_config).await?;
    let repo = Arc::new(MySqlOrderRepository::new(pool));
    repo.ensure_schema()
        .await
        .context("failed to create orders table")?;

    Ok(OrderState {
        config: config.to_runtime_config(),
        storage: repo.clone(),
        order_repo: repo,
        metrics: Arc::new(Metrics::new(service.name())),
    })
}
