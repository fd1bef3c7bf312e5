use hickory_proto::rr::Record;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One cached answer set.
#[derive(Debug, Clone)]
pub struct CachedRecords {
    pub records: Arc<[Record]>,
    /// `None` never expires; the entry only goes away when overwritten.
    pub expires_at: Option<Instant>,
}

impl CachedRecords {
    pub fn new(records: Vec<Record>, ttl: Duration, now: Instant) -> Self {
        Self {
            records: Arc::from(records),
            expires_at: (!ttl.is_zero()).then(|| now + ttl),
        }
    }

    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}
