use async_trait::async_trait;

/// Connectivity and schema lifecycle of one backing store.
#[async_trait]
pub trait StorageConnector: Send + Sync {
    /// Cheap round-trip used by startup polling and readiness checks.
    async fn ping(&self) -> anyhow::Result<()>;

    /// Creates missing databases/tables. Safe to call on every start.
    async fn ensure_schema(&self) -> anyhow::Result<()>;
}
