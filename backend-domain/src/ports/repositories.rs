use async_trait::async_trait;

use crate::entities::{AnalyticsEvent, Game, GameDraft, Order, OrderDraft};

/// Append-only sink for tracking events; the implementation picks the table by kind.
#[async_trait]
pub trait AnalyticsEventRepository: Send + Sync {
    async fn insert_event(&self, event: &AnalyticsEvent) -> anyhow::Result<()>;
}

/// `Ok(None)` means the id does not exist; errors are reserved for storage failures.
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create(&self, draft: &GameDraft) -> anyhow::Result<Game>;
    async fn list_all(&self) -> anyhow::Result<Vec<Game>>;
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<Game>>;
    async fn update_by_id(&self, id: i64, draft: &GameDraft) -> anyhow::Result<Option<Game>>;
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<Option<Game>>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, draft: &OrderDraft) -> anyhow::Result<Order>;
    async fn list_all(&self) -> anyhow::Result<Vec<Order>>;
    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<Order>>;
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<Option<Order>>;
}
