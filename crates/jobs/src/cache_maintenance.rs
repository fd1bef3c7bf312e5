use mesh64_application::ports::CacheMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_PURGE_INTERVAL_SECS: u64 = 60;

/// Periodically drops expired entries from the synthesis cache.
pub struct CachePurgeJob {
    maintenance: Arc<dyn CacheMaintenancePort>,
    purge_interval: Duration,
    shutdown: CancellationToken,
}

impl CachePurgeJob {
    pub fn new(maintenance: Arc<dyn CacheMaintenancePort>) -> Self {
        Self {
            maintenance,
            purge_interval: Duration::from_secs(DEFAULT_PURGE_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.purge_interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.purge_interval.as_secs(),
            "Starting cache purge job"
        );

        let mut interval = tokio::time::interval(self.purge_interval);
        // The first tick completes immediately.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CachePurgeJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.maintenance.run_purge_cycle().await {
                        Ok(outcome) => {
                            if outcome.entries_removed > 0 {
                                info!(
                                    entries_removed = outcome.entries_removed,
                                    cache_size = outcome.cache_size,
                                    "Cache purge cycle completed"
                                );
                            } else {
                                debug!(cache_size = outcome.cache_size, "Cache purge found nothing to remove");
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "Cache purge cycle failed");
                        }
                    }
                }
            }
        }
    }
}
