pub mod builders;

pub use builders::{zone_id, ZoneConfigBuilder, ZoneTableBuilder};
