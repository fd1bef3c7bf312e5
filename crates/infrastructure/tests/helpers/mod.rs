#![allow(unused_imports)]

pub mod builders;
pub mod dns_server_mock;

pub use builders::{query_message, MockAnswersBuilder};
pub use dns_server_mock::{a_record, aaaa_record, ptr_record, MockAnswer, MockDnsServer};
