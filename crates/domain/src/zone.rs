use crate::config::{ZoneConfig, WILDCARD_DOMAIN};
use crate::dns_name::is_within;
use crate::synthetic::SyntheticPrefix;
use crate::DomainError;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: Arc<str>,
    pub domains: Vec<String>,
    pub prefix: Option<SyntheticPrefix>,
    pub return_public_ipv4: bool,
}

impl Zone {
    pub fn new(id: impl Into<Arc<str>>, config: &ZoneConfig) -> Self {
        Self {
            id: id.into(),
            domains: config.domains.clone(),
            prefix: config.prefix.map(SyntheticPrefix::new),
            return_public_ipv4: config.return_public_ipv4,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.domains.iter().any(|d| d == WILDCARD_DOMAIN)
    }

    pub fn matches(&self, name: &str) -> bool {
        self.domains.iter().any(|pattern| is_within(name, pattern))
    }

    pub fn required_prefix(&self) -> Result<SyntheticPrefix, DomainError> {
        self.prefix
            .ok_or_else(|| DomainError::InvalidPrefix(self.id.to_string()))
    }
}

/// Maps query names onto configured zones.
///
/// Zones are consulted in lexical order of their ids, patterns in declaration
/// order. The first suffix match wins; otherwise the wildcard zone is used.
#[derive(Debug, Clone, Default)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}

impl ZoneTable {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    pub fn from_config(zones: &BTreeMap<String, ZoneConfig>) -> Self {
        Self::new(
            zones
                .iter()
                .map(|(id, config)| Zone::new(id.as_str(), config))
                .collect(),
        )
    }

    /// `None` means no zone claims the name and no wildcard zone exists.
    pub fn resolve(&self, name: &str) -> Option<&Zone> {
        self.zones
            .iter()
            .find(|zone| zone.matches(name))
            .or_else(|| self.wildcard())
    }

    pub fn wildcard(&self) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.is_wildcard())
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
