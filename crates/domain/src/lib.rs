//! mesh64-dns domain layer
pub mod config;
pub mod dns_name;
pub mod errors;
pub mod forwarder;
pub mod invalid_address;
pub mod proxy_state;
pub mod reverse;
pub mod static_hosts;
pub mod synthetic;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError, ZoneConfig};
pub use errors::DomainError;
pub use forwarder::ForwarderTable;
pub use invalid_address::{InvalidAddressAction, InvalidAddressPolicy};
pub use proxy_state::ProxyState;
pub use static_hosts::StaticHosts;
pub use synthetic::{MeshNetwork, SyntheticPrefix};
pub use zone::{Zone, ZoneTable};
