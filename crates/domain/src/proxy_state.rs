use crate::config::{Config, ConfigError};
use crate::forwarder::ForwarderTable;
use crate::invalid_address::InvalidAddressPolicy;
use crate::static_hosts::StaticHosts;
use crate::synthetic::MeshNetwork;
use crate::zone::ZoneTable;

/// Read-only routing and synthesis settings shared by every query task.
#[derive(Debug, Clone)]
pub struct ProxyState {
    pub zones: ZoneTable,
    pub forwarders: ForwarderTable,
    pub static_hosts: StaticHosts,
    pub invalid_address: InvalidAddressPolicy,
    pub mesh: MeshNetwork,
}

impl ProxyState {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            zones: ZoneTable::from_config(&config.zones),
            forwarders: ForwarderTable::new(&config.upstream.forwarders, &config.upstream.default),
            static_hosts: StaticHosts::new(&config.static_hosts),
            invalid_address: config.invalid_address,
            mesh: config.mesh_network()?,
        })
    }
}
