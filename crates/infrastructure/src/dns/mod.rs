pub mod cache;
pub mod cache_maintenance;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use cache::{CacheMetrics, CachedRecords, SynthesisCache};
pub use cache_maintenance::SynthesisCacheMaintenance;
pub use forwarding::UdpUpstream;
pub use server::DnsServerHandler;
