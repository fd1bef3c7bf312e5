use mesh64_application::ports::CacheMaintenancePort;
use mesh64_application::use_cases::HandleDnsQueryUseCase;
use mesh64_domain::{Config, ProxyState};
use mesh64_infrastructure::dns::{
    DnsServerHandler, SynthesisCache, SynthesisCacheMaintenance, UdpUpstream,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub cache: Arc<SynthesisCache>,
    pub handler: DnsServerHandler,
    pub cache_maintenance: Arc<dyn CacheMaintenancePort>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let state = Arc::new(ProxyState::from_config(config)?);
        info!(
            zones = state.zones.len(),
            mesh_network = %state.mesh,
            "Proxy state built"
        );

        let cache = Arc::new(SynthesisCache::new(config.cache.expiration()));
        let upstream = Arc::new(UdpUpstream::new(Duration::from_millis(
            config.upstream.query_timeout,
        )));

        let use_case = Arc::new(HandleDnsQueryUseCase::new(
            state,
            cache.clone(),
            upstream,
        ));

        let cache_maintenance: Arc<dyn CacheMaintenancePort> =
            Arc::new(SynthesisCacheMaintenance::new(cache.clone()));

        Ok(Self {
            cache,
            handler: DnsServerHandler::new(use_case),
            cache_maintenance,
        })
    }
}
