#![allow(dead_code)]

pub mod mock_ports;
pub mod records;

pub use mock_ports::{MockResponseCache, MockUpstream};
pub use records::{a, aaaa, ptr, query_message, state_from_toml};
