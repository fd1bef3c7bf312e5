use crate::dns_name::ends_with_suffix;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Picks the upstream server for a query name.
#[derive(Debug, Clone)]
pub struct ForwarderTable {
    rules: Vec<(String, Arc<str>)>,
    default: Arc<str>,
}

impl ForwarderTable {
    pub fn new(forwarders: &BTreeMap<String, String>, default: &str) -> Self {
        Self {
            rules: forwarders
                .iter()
                .map(|(suffix, server)| (suffix.clone(), Arc::from(server.as_str())))
                .collect(),
            default: Arc::from(default),
        }
    }

    /// First suffix `k` with `name.ends_with(k + ".")`, else the default.
    pub fn resolve(&self, name: &str) -> Arc<str> {
        self.rules
            .iter()
            .find(|(suffix, _)| ends_with_suffix(name, suffix))
            .map(|(_, server)| Arc::clone(server))
            .unwrap_or_else(|| Arc::clone(&self.default))
    }

    pub fn default_server(&self) -> &str {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
