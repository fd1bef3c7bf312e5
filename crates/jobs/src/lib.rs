pub mod cache_maintenance;
pub mod runner;

pub use cache_maintenance::CachePurgeJob;
pub use runner::JobRunner;
