use async_trait::async_trait;
use mesh64_application::ports::{CacheMaintenancePort, CachePurgeOutcome};
use mesh64_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

pub struct MockCacheMaintenancePort {
    purge_call_count: AtomicU64,
    should_fail: AtomicBool,
    outcome: RwLock<CachePurgeOutcome>,
}

impl MockCacheMaintenancePort {
    pub fn new() -> Self {
        Self {
            purge_call_count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
            outcome: RwLock::new(CachePurgeOutcome::default()),
        }
    }

    pub fn with_outcome(self, outcome: CachePurgeOutcome) -> Self {
        *self.outcome.write().unwrap() = outcome;
        self
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn purge_call_count(&self) -> u64 {
        self.purge_call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockCacheMaintenancePort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheMaintenancePort for MockCacheMaintenancePort {
    async fn run_purge_cycle(&self) -> Result<CachePurgeOutcome, DomainError> {
        self.purge_call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::InvalidDnsResponse("purge failed".to_string()));
        }
        Ok(self.outcome.read().unwrap().clone())
    }
}
