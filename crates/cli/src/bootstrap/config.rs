use mesh64_domain::{CliOverrides, Config};
use tracing::info;

/// Loads, overrides and validates the configuration before anything listens.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config_summary(config: &Config) {
    info!(
        listen = %config.server.listen,
        workers = config.server.workers,
        upstream = %config.upstream.default,
        forwarders = config.upstream.forwarders.len(),
        zones = config.zones.len(),
        static_hosts = config.static_hosts.len(),
        invalid_address = ?config.invalid_address,
        "Configuration loaded"
    );
}
