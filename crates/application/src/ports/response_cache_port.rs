use hickory_proto::rr::Record;
use std::sync::Arc;
use std::time::Duration;

/// Memo of synthesized AAAA answers, keyed by lowercase fully-qualified name.
pub trait ResponseCachePort: Send + Sync {
    /// Expired entries count as a miss.
    fn get(&self, name: &str) -> Option<Arc<[Record]>>;

    /// `ttl == Duration::ZERO` applies the cache's default expiration.
    /// An empty record set is a valid entry.
    fn set(&self, name: &str, records: Vec<Record>, ttl: Duration);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
