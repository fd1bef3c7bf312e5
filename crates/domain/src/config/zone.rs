use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;

/// Domain pattern that marks the fallback zone.
pub const WILDCARD_DOMAIN: &str = ".";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ZoneConfig {
    /// Suffix patterns, without trailing dot. `"."` makes this the wildcard zone.
    pub domains: Vec<String>,

    /// High-order bytes of synthesized addresses. Without it, the zone never
    /// synthesizes.
    #[serde(default)]
    pub prefix: Option<Ipv6Addr>,

    /// Also hand genuine IPv4 answers to clients.
    #[serde(default)]
    pub return_public_ipv4: bool,
}

impl ZoneConfig {
    pub fn is_wildcard(&self) -> bool {
        self.domains.iter().any(|d| d == WILDCARD_DOMAIN)
    }
}
