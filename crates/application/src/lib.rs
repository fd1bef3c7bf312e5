//! mesh64-dns application layer: ports and the query pipeline.
pub mod ports;
pub mod use_cases;
