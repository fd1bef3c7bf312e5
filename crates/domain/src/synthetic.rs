//! Synthetic IPv6 addresses.
//!
//! A synthetic address keeps the first 12 bytes of a zone prefix and carries
//! the IPv4 octets, in order, in bytes 12..16. The embedding is reversible
//! only when the prefix of the zone it was made for is known.

use crate::DomainError;
use ipnetwork::Ipv6Network;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub const PREFIX_LEN: usize = 12;

pub const MESH_NETWORK_CIDR: &str = "200::/7";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntheticPrefix(Ipv6Addr);

impl SyntheticPrefix {
    pub fn new(addr: Ipv6Addr) -> Self {
        Self(addr)
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.0
    }

    pub fn is_unspecified(&self) -> bool {
        self.0.is_unspecified()
    }

    /// Builds a fresh address; the prefix itself is never modified.
    pub fn embed(&self, ipv4: Ipv4Addr) -> Ipv6Addr {
        let mut octets = self.0.octets();
        octets[PREFIX_LEN..].copy_from_slice(&ipv4.octets());
        Ipv6Addr::from(octets)
    }

    pub fn matches(&self, candidate: Ipv6Addr) -> bool {
        candidate.octets()[..PREFIX_LEN] == self.0.octets()[..PREFIX_LEN]
    }

    pub fn extract(&self, candidate: Ipv6Addr) -> Result<Ipv4Addr, DomainError> {
        if !self.matches(candidate) {
            return Err(DomainError::PrefixMismatch);
        }
        let octets = candidate.octets();
        Ok(Ipv4Addr::new(
            octets[12], octets[13], octets[14], octets[15],
        ))
    }
}

impl From<Ipv6Addr> for SyntheticPrefix {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr)
    }
}

impl fmt::Display for SyntheticPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address block of the mesh network. Upstream AAAA answers inside it are
/// native and bypass synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshNetwork(Ipv6Network);

impl MeshNetwork {
    pub fn new(network: Ipv6Network) -> Self {
        Self(network)
    }

    pub fn contains(&self, addr: Ipv6Addr) -> bool {
        self.0.contains(addr)
    }
}

impl FromStr for MeshNetwork {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6Network::from_str(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidCidr(format!("{}: {}", s, e)))
    }
}

impl fmt::Display for MeshNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
