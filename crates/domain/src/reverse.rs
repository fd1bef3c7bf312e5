//! Reverse-lookup names (`in-addr.arpa` / `ip6.arpa`).

use crate::synthetic::SyntheticPrefix;
use crate::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const IPV4_SUFFIX: &str = ".in-addr.arpa.";
const IPV6_SUFFIX: &str = ".ip6.arpa.";

/// Decodes a reverse-lookup name into the address it stands for.
pub fn parse_reverse_name(name: &str) -> Result<IpAddr, DomainError> {
    let lower = name.to_ascii_lowercase();

    if let Some(labels) = lower.strip_suffix(IPV4_SUFFIX) {
        return parse_ipv4_labels(labels)
            .map(IpAddr::V4)
            .ok_or_else(|| DomainError::MalformedPtr(name.to_string()));
    }

    if let Some(labels) = lower.strip_suffix(IPV6_SUFFIX) {
        return parse_ipv6_labels(labels)
            .map(IpAddr::V6)
            .ok_or_else(|| DomainError::MalformedPtr(name.to_string()));
    }

    Err(DomainError::MalformedPtr(name.to_string()))
}

fn parse_ipv4_labels(labels: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut count = 0;
    for (i, label) in labels.split('.').enumerate() {
        if i >= 4 || label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        octets[3 - i] = label.parse().ok()?;
        count += 1;
    }
    (count == 4).then(|| Ipv4Addr::from(octets))
}

fn parse_ipv6_labels(labels: &str) -> Option<Ipv6Addr> {
    let mut octets = [0u8; 16];
    let mut count = 0;
    for (i, label) in labels.split('.').enumerate() {
        if i >= 32 || label.len() != 1 {
            return None;
        }
        let nibble = char::from(label.as_bytes()[0]).to_digit(16)? as u8;
        let octet = &mut octets[15 - i / 2];
        if i % 2 == 0 {
            *octet |= nibble;
        } else {
            *octet |= nibble << 4;
        }
        count += 1;
    }
    (count == 32).then(|| Ipv6Addr::from(octets))
}

/// Recovers the IPv4 address embedded in a synthetic `ip6.arpa` name.
pub fn extract_synthesized_ipv4(
    name: &str,
    prefix: &SyntheticPrefix,
) -> Result<Ipv4Addr, DomainError> {
    match parse_reverse_name(name)? {
        IpAddr::V4(_) => Err(DomainError::NotIpv6(name.to_string())),
        IpAddr::V6(addr) => prefix.extract(addr),
    }
}

/// `d.c.b.a.in-addr.arpa.` for `a.b.c.d`.
pub fn reverse_name_v4(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{}.{}.{}.{}{}", d, c, b, a, IPV4_SUFFIX)
}
