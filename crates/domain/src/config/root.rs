use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::{Ipv4Addr, SocketAddr};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use super::zone::ZoneConfig;
use crate::invalid_address::InvalidAddressPolicy;
use crate::synthetic::{MeshNetwork, MESH_NETWORK_CIDR};

const LOCAL_CONFIG_PATH: &str = "mesh64-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/mesh64-dns/config.toml";

/// Main configuration structure for mesh64-dns
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Treatment of `0.0.0.0` / `::` answers
    #[serde(default)]
    pub invalid_address: InvalidAddressPolicy,

    /// Address block whose AAAA answers are passed through untouched
    #[serde(default = "default_mesh_network")]
    pub mesh_network: String,

    /// Listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream servers and per-suffix forwarders
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Names answered from a fixed IPv4 address instead of upstream
    #[serde(default, rename = "static")]
    pub static_hosts: BTreeMap<String, Ipv4Addr>,

    /// Synthesized answer cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Zone id → zone definition
    #[serde(default)]
    pub zones: BTreeMap<String, ZoneConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            invalid_address: InvalidAddressPolicy::default(),
            mesh_network: default_mesh_network(),
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            static_hosts: BTreeMap::new(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
            zones: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. mesh64-dns.toml in current directory
    /// 3. /etc/mesh64-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen {
            self.server.listen = listen;
        }
        if let Some(workers) = overrides.workers {
            self.server.workers = workers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Startup checks. Any failure here keeps the process from serving.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_socket_addr("listen", &self.server.listen)?;
        if self.server.workers == 0 {
            return Err(ConfigError::Validation(
                "server.workers must be at least 1".to_string(),
            ));
        }

        parse_socket_addr("upstream.default", &self.upstream.default)?;
        if self.upstream.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "upstream.query_timeout must be greater than 0".to_string(),
            ));
        }
        for (suffix, server) in &self.upstream.forwarders {
            if suffix.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Forwarder with empty domain suffix".to_string(),
                ));
            }
            parse_socket_addr(&format!("forwarder '{}'", suffix), server)?;
        }

        self.mesh_network()?;
        self.validate_zones()
    }

    fn validate_zones(&self) -> Result<(), ConfigError> {
        for (id, zone) in &self.zones {
            if zone.domains.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Zone '{}' has no domains",
                    id
                )));
            }
            if zone.domains.iter().any(|d| d.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "Zone '{}' has an empty domain pattern",
                    id
                )));
            }
        }

        let wildcards: Vec<(&String, &ZoneConfig)> = self
            .zones
            .iter()
            .filter(|(_, zone)| zone.is_wildcard())
            .collect();

        let (id, zone) = match wildcards.as_slice() {
            [] => {
                return Err(ConfigError::Validation(
                    "No zone with the '.' domain configured".to_string(),
                ))
            }
            [single] => *single,
            _ => {
                let ids: Vec<&str> = wildcards.iter().map(|(id, _)| id.as_str()).collect();
                return Err(ConfigError::Validation(format!(
                    "Only one zone may carry the '.' domain, found: {}",
                    ids.join(", ")
                )));
            }
        };

        match zone.prefix {
            Some(prefix) if !prefix.is_unspecified() => Ok(()),
            Some(prefix) => Err(ConfigError::Validation(format!(
                "Wrong prefix format for zone '{}': {}",
                id, prefix
            ))),
            None => Err(ConfigError::Validation(format!(
                "Zone '{}' must define a prefix",
                id
            ))),
        }
    }

    pub fn mesh_network(&self) -> Result<MeshNetwork, ConfigError> {
        self.mesh_network
            .parse()
            .map_err(|e: crate::DomainError| ConfigError::Validation(e.to_string()))
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

fn parse_socket_addr(what: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e| {
        ConfigError::Validation(format!("Invalid {} address '{}': {}", what, value, e))
    })
}

fn default_mesh_network() -> String {
    MESH_NETWORK_CIDR.to_string()
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen: Option<String>,
    pub workers: Option<usize>,
    pub log_level: Option<String>,
}
