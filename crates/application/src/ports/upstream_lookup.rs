use async_trait::async_trait;
use hickory_proto::op::Message;
use mesh64_domain::DomainError;

/// Sends one DNS message to an upstream server and returns its reply.
#[async_trait]
pub trait UpstreamLookup: Send + Sync {
    /// `server` is an `ip:port` string taken from the forwarder table.
    async fn lookup(&self, server: &str, request: &Message) -> Result<Message, DomainError>;
}
