use clap::Parser;
use mesh64_application::ports::ResponseCachePort;
use mesh64_domain::CliOverrides;
use mesh64_jobs::{CachePurgeJob, JobRunner};
use std::sync::atomic::Ordering;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "mesh64-dns")]
#[command(version)]
#[command(about = "mesh64-dns - DNS proxy synthesizing mesh IPv6 addresses from IPv4 answers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address, e.g. [::]:53
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Number of UDP worker sockets
    #[arg(long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        listen: cli.listen.clone(),
        workers: cli.workers,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting mesh64-dns v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_summary(&config);

    let services = di::DnsServices::new(&config)?;
    let shutdown = CancellationToken::new();

    let mut jobs = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(interval) = config.cache.purge_interval() {
        jobs = jobs.with_cache_purge(
            CachePurgeJob::new(services.cache_maintenance.clone()).with_interval(interval),
        );
    }
    let job_handles = jobs.start().await;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        signal_token.cancel();
    });

    let served = server::start_dns_server(
        &config.server.listen,
        services.handler,
        config.server.workers,
        shutdown.clone(),
    )
    .await;

    shutdown.cancel();
    for handle in job_handles {
        let _ = handle.await;
    }

    let metrics = services.cache.metrics();
    info!(
        entries = services.cache.len(),
        hits = metrics.hits.load(Ordering::Relaxed),
        misses = metrics.misses.load(Ordering::Relaxed),
        hit_rate = metrics.hit_rate(),
        "Server shutdown complete"
    );

    served
}
