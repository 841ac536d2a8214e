use std::sync::Arc;

use backend_domain::ports::{
    AnalyticsEventRepository, GameRepository, OrderRepository, StorageConnector,
};
use backend_domain::RuntimeConfig;

use crate::Metrics;

/// What the shared operational routes need from any of the three services.
pub trait ServiceState: Clone + Send + Sync + 'static {
    fn config(&self) -> &RuntimeConfig;
    fn storage(&self) -> &dyn StorageConnector;
    fn metrics(&self) -> &Metrics;

    fn render_metrics(&self) -> String {
        self.metrics().render_prometheus()
    }
}

#[derive(Clone)]
pub struct AnalyticsState {
    pub config: RuntimeConfig,
    pub storage: Arc<dyn StorageConnector>,
    pub event_repo: Arc<dyn AnalyticsEventRepository>,
    pub metrics: Arc<Metrics>,
}

#[derive(Clone)]
pub struct GameState {
    pub config: RuntimeConfig,
    pub storage: Arc<dyn StorageConnector>,
    pub game_repo: Arc<dyn GameRepository>,
    pub metrics: Arc<Metrics>,
}

#[derive(Clone)]
pub struct OrderState {
    pub config: RuntimeConfig,
    pub storage: Arc<dyn StorageConnector>,
    pub order_repo: Arc<dyn OrderRepository>,
    pub metrics: Arc<Metrics>,
}

impl ServiceState for AnalyticsState {
    fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    fn storage(&self) -> &dyn StorageConnector {
        self.storage.as_ref()
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn render_metrics(&self) -> String {
        let mut payload = self.metrics.render_prometheus();
        payload.push_str(&self.metrics.render_tracked_events());
        payload
    }
}

impl ServiceState for GameState {
    fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    fn storage(&self) -> &dyn StorageConnector {
        self.storage.as_ref()
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl ServiceState for OrderState {
    fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    fn storage(&self) -> &dyn StorageConnector {
        self.storage.as_ref()
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
