#![allow(dead_code)]
use mesh64_domain::{Zone, ZoneConfig, ZoneTable};
use std::collections::BTreeMap;
use std::net::Ipv6Addr;

pub struct ZoneConfigBuilder {
    domains: Vec<String>,
    prefix: Option<Ipv6Addr>,
    return_public_ipv4: bool,
}

impl ZoneConfigBuilder {
    pub fn new() -> Self {
        Self {
            domains: vec![],
            prefix: None,
            return_public_ipv4: false,
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domains.push(domain.to_string());
        self
    }

    pub fn wildcard(self) -> Self {
        self.domain(".")
    }

    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.parse().unwrap());
        self
    }

    pub fn public_ipv4(mut self, enabled: bool) -> Self {
        self.return_public_ipv4 = enabled;
        self
    }

    pub fn build(self) -> ZoneConfig {
        ZoneConfig {
            domains: self.domains,
            prefix: self.prefix,
            return_public_ipv4: self.return_public_ipv4,
        }
    }
}

pub struct ZoneTableBuilder {
    zones: BTreeMap<String, ZoneConfig>,
}

impl ZoneTableBuilder {
    pub fn new() -> Self {
        Self {
            zones: BTreeMap::new(),
        }
    }

    pub fn zone(mut self, id: &str, config: ZoneConfig) -> Self {
        self.zones.insert(id.to_string(), config);
        self
    }

    pub fn configs(&self) -> &BTreeMap<String, ZoneConfig> {
        &self.zones
    }

    pub fn build(self) -> ZoneTable {
        ZoneTable::from_config(&self.zones)
    }
}

pub fn zone_id(zone: Option<&Zone>) -> Option<&str> {
    zone.map(|z| &*z.id)
}
