#![allow(dead_code)]

pub mod mock_ports;

pub use mock_ports::MockCacheMaintenancePort;
