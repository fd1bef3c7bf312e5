use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Server used when no forwarder suffix matches.
    #[serde(default = "default_server")]
    pub default: String,

    /// Per-exchange timeout in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Domain suffix → `ip:port` of the server answering for it.
    #[serde(default)]
    pub forwarders: BTreeMap<String, String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            default: default_server(),
            query_timeout: default_query_timeout(),
            forwarders: BTreeMap::new(),
        }
    }
}

fn default_server() -> String {
    "1.1.1.1:53".to_string()
}

fn default_query_timeout() -> u64 {
    2000
}
