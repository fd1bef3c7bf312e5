use crate::dns_name::normalize_fqdn;
use std::collections::HashMap;
use std::net::Ipv4Addr;

/// Operator-pinned IPv4 addresses, matched on the exact name.
#[derive(Debug, Clone, Default)]
pub struct StaticHosts {
    hosts: HashMap<String, Ipv4Addr>,
}

impl StaticHosts {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a String, &'a Ipv4Addr)>) -> Self {
        Self {
            hosts: entries
                .into_iter()
                .map(|(name, addr)| (normalize_fqdn(name), *addr))
                .collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Ipv4Addr> {
        self.hosts.get(&normalize_fqdn(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
