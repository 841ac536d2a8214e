use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::{info, warn};

use backend_domain::StorageConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            config.connect_attempts,
            Duration::from_secs(config.retry_delay_seconds),
        )
    }
}

/// Runs `op` until it succeeds or the policy is exhausted. The last error is
/// returned with the attempt count attached.
pub async fn retry_startup<T, F, Fut>(label: &str, policy: RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => {
                info!("{} is ready (attempt {}/{})", label, attempt, attempts);
                return Ok(value);
            }
            Err(err) if attempt < attempts => {
                warn!(
                    "{} not ready (attempt {}/{}): {:#}; retrying in {:?}",
                    label, attempt, attempts, err, policy.delay
                );
                sleep(policy.delay).await;
                attempt += 1;
            }
            Err(err) => {
                return Err(err.context(format!(
                    "{} unavailable after {} attempts",
                    label, attempts
                )));
            }
        }
    }
}
