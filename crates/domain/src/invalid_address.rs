use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// What to do when an upstream answers with the unspecified address
/// (`0.0.0.0` or `::`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InvalidAddressPolicy {
    /// Treat the unspecified address like any other: `0.0.0.0` is synthesized
    /// into the zone prefix and hidden like any IPv4 answer, `::` is kept.
    #[default]
    Ignore,
    /// Rewrite an unspecified A record into a `::` AAAA record.
    Process,
    /// Drop the record from the answer.
    Discard,
}

/// Outcome of applying the policy to one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAddressAction {
    /// The address is specified; regular translation applies.
    Translate,
    /// Keep the record untouched, skip synthesis.
    KeepAsIs,
    /// Replace with the unspecified IPv6 address.
    Rewrite,
    Drop,
}

impl InvalidAddressPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Process => "process",
            Self::Discard => "discard",
        }
    }

    /// Decision for an upstream A record. Only `Process` and `Discard` single
    /// out `0.0.0.0`.
    pub fn for_ipv4(&self, addr: std::net::Ipv4Addr) -> InvalidAddressAction {
        if !addr.is_unspecified() {
            return InvalidAddressAction::Translate;
        }
        match self {
            Self::Ignore => InvalidAddressAction::Translate,
            Self::Process => InvalidAddressAction::Rewrite,
            Self::Discard => InvalidAddressAction::Drop,
        }
    }

    /// Decision for an upstream AAAA record. An unspecified AAAA is never
    /// rewritten, `Process` passes it through like `Ignore`.
    pub fn for_ipv6(&self, addr: std::net::Ipv6Addr) -> InvalidAddressAction {
        if !addr.is_unspecified() {
            return InvalidAddressAction::Translate;
        }
        match self {
            Self::Ignore | Self::Process => InvalidAddressAction::KeepAsIs,
            Self::Discard => InvalidAddressAction::Drop,
        }
    }
}

impl fmt::Display for InvalidAddressPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvalidAddressPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "process" => Ok(Self::Process),
            "discard" => Ok(Self::Discard),
            _ => Err("invalid-address must be one of 'ignore/process/discard'".to_string()),
        }
    }
}

impl Serialize for InvalidAddressPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InvalidAddressPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
