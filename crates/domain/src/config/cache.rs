use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Lifetime of a synthesized answer in seconds. 0 keeps entries until
    /// they are overwritten, so every distinct name stays in memory for the
    /// life of the process.
    #[serde(default = "default_expiration")]
    pub expiration: u64,

    /// Seconds between purge sweeps. 0 disables the sweep; expired entries
    /// are then only skipped on read and never freed.
    #[serde(default = "default_purge_interval")]
    pub purge_interval: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expiration: default_expiration(),
            purge_interval: default_purge_interval(),
        }
    }
}

impl CacheConfig {
    pub fn expiration(&self) -> Duration {
        Duration::from_secs(self.expiration)
    }

    pub fn purge_interval(&self) -> Option<Duration> {
        (self.purge_interval > 0).then(|| Duration::from_secs(self.purge_interval))
    }
}

fn default_expiration() -> u64 {
    600
}

fn default_purge_interval() -> u64 {
    60
}
