use super::cache::SynthesisCache;

use async_trait::async_trait;
use mesh64_application::ports::{CacheMaintenancePort, CachePurgeOutcome, ResponseCachePort};
use mesh64_domain::DomainError;
use std::sync::Arc;

/// Infrastructure adapter implementing `CacheMaintenancePort`.
pub struct SynthesisCacheMaintenance {
    cache: Arc<SynthesisCache>,
}

impl SynthesisCacheMaintenance {
    pub fn new(cache: Arc<SynthesisCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheMaintenancePort for SynthesisCacheMaintenance {
    async fn run_purge_cycle(&self) -> Result<CachePurgeOutcome, DomainError> {
        let entries_removed = self.cache.purge_expired();
        Ok(CachePurgeOutcome {
            entries_removed,
            cache_size: self.cache.len(),
        })
    }
}
