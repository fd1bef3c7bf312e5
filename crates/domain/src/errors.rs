use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Zone '{0}' has no synthetic prefix configured")]
    InvalidPrefix(String),

    #[error("Address does not carry the zone prefix")]
    PrefixMismatch,

    #[error("Malformed PTR name: {0}")]
    MalformedPtr(String),

    #[error("PTR name does not encode an IPv6 address: {0}")]
    NotIpv6(String),

    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Upstream {server} failed: {reason}")]
    UpstreamFailure { server: String, reason: String },
}
