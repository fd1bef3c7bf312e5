mod cache_maintenance_port;
mod response_cache_port;
mod upstream_lookup;

pub use cache_maintenance_port::{CacheMaintenancePort, CachePurgeOutcome};
pub use response_cache_port::ResponseCachePort;
pub use upstream_lookup::UpstreamLookup;
