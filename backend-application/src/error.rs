use thiserror::Error;
use tracing::error;

use crate::Metrics;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: i64 },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(metrics: &Metrics, resource: &'static str, id: i64) -> Self {
        metrics.record_not_found();
        AppError::NotFound { resource, id }
    }

    /// Logs the driver error in full; callers only ever see the opaque variant.
    pub fn storage(metrics: &Metrics, action: &str, err: anyhow::Error) -> Self {
        metrics.record_storage_error();
        error!("failed to {}: {:#}", action, err);
        AppError::Internal(err)
    }
}
