use mesh64_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const MAX_DATAGRAM_SIZE: usize = 4096;

/// Binds `num_workers` UDP sockets to the same address and serves until `shutdown` fires.
pub async fn start_dns_server(
    bind_addr: &str,
    handler: DnsServerHandler,
    num_workers: usize,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    info!(bind_address = %socket_addr, num_workers, "Starting DNS server with SO_REUSEPORT");

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    for i in 0..num_workers {
        let udp_socket = Arc::new(create_udp_socket(domain, socket_addr)?);
        let handler_udp = handler.clone();
        let shutdown = shutdown.clone();
        join_set.spawn(async move {
            run_udp_worker(udp_socket, handler_udp, i, shutdown).await;
        });
    }

    info!(num_workers, bind_address = %socket_addr, "DNS server ready");

    while join_set.join_next().await.is_some() {}
    info!("DNS server stopped");
    Ok(())
}

async fn run_udp_worker(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    worker_id: usize,
    shutdown: CancellationToken,
) {
    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        let received = tokio::select! {
            _ = shutdown.cancelled() => {
                debug!(worker = worker_id, "UDP worker shutting down");
                break;
            }
            received = socket.recv_from(&mut recv_buf) => received,
        };

        match received {
            Ok((n, from)) => {
                let handler = handler.clone();
                let socket = socket.clone();
                let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
                tokio::spawn(async move {
                    if let Some(response) = handler.handle_raw_udp(&owned_buf, from).await {
                        if let Err(e) = socket.send_to(&response, from).await {
                            debug!(client = %from, error = %e, "Failed to send reply");
                        }
                    }
                });
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!(worker = worker_id, error = %e, "UDP recv error");
            }
        }
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
