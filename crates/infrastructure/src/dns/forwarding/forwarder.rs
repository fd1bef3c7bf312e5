use super::{MessageBuilder, ResponseParser};
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType};
use mesh64_application::ports::UpstreamLookup;
use mesh64_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Forwards queries to upstream resolvers over UDP.
pub struct UdpUpstream {
    timeout: Duration,
}

impl UdpUpstream {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn parse_server(server: &str) -> Result<SocketAddr, DomainError> {
        server.parse().map_err(|e| DomainError::TransportError {
            server: server.to_string(),
            reason: format!("invalid server address: {}", e),
        })
    }
}

#[async_trait]
impl UpstreamLookup for UdpUpstream {
    async fn lookup(&self, server: &str, request: &Message) -> Result<Message, DomainError> {
        let addr = Self::parse_server(server)?;
        let (id, bytes) = MessageBuilder::build_query_with_id(request)?;

        let transport = UdpTransport::new(addr);
        let response = transport.send(&bytes, self.timeout).await?;

        debug!(
            server = %addr,
            protocol = response.protocol_used,
            "Upstream exchange completed"
        );

        let message = ResponseParser::parse(&response.bytes, id)?;
        if message.message_type() != MessageType::Response {
            return Err(DomainError::UpstreamFailure {
                server: addr.to_string(),
                reason: "reply is not a DNS response".to_string(),
            });
        }
        Ok(message)
    }
}
