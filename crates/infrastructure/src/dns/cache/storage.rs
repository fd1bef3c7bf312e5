use super::{CacheMetrics, CachedRecords};
use dashmap::DashMap;
use hickory_proto::rr::Record;
use mesh64_application::ports::ResponseCachePort;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Concurrent memo of synthesized AAAA answers.
///
/// Keys are lowercase fully-qualified names. Writers for the same name race,
/// the last one wins.
pub struct SynthesisCache {
    entries: DashMap<Arc<str>, CachedRecords, FxBuildHasher>,
    default_expiration: Duration,
    metrics: Arc<CacheMetrics>,
}

impl SynthesisCache {
    /// `default_expiration` of zero keeps entries until they are overwritten.
    pub fn new(default_expiration: Duration) -> Self {
        info!(
            default_expiration_secs = default_expiration.as_secs(),
            "Initializing synthesis cache"
        );

        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            default_expiration,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn get_at(&self, name: &str, now: Instant) -> Option<Arc<[Record]>> {
        let hit = match self.entries.get(name) {
            Some(entry) if !entry.is_expired_at(now) => Some(Arc::clone(&entry.records)),
            Some(_) => {
                self.metrics
                    .lazy_expirations
                    .fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
            None => None,
        };

        match hit {
            Some(records) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                Some(records)
            }
            None => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    pub fn set_at(&self, name: &str, records: Vec<Record>, ttl: Duration, now: Instant) {
        let ttl = if ttl.is_zero() {
            self.default_expiration
        } else {
            ttl
        };
        self.entries
            .insert(Arc::from(name), CachedRecords::new(records, ttl, now));
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    /// Drops every entry expired at `now`, returns how many went away.
    pub fn purge_expired_at(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired_at(now);
            if !keep {
                removed += 1;
            }
            keep
        });

        if removed > 0 {
            self.metrics
                .purged
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);
            debug!(removed, cache_size = self.entries.len(), "Expired cache entries purged");
        }
        removed
    }

    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }
}

impl ResponseCachePort for SynthesisCache {
    fn get(&self, name: &str) -> Option<Arc<[Record]>> {
        self.get_at(name, Instant::now())
    }

    fn set(&self, name: &str, records: Vec<Record>, ttl: Duration) {
        self.set_at(name, records, ttl, Instant::now())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
