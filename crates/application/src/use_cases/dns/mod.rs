pub mod handle_dns_query;
pub mod record_rewrite;

pub use handle_dns_query::{HandleDnsQueryUseCase, QueryFailure};
pub use record_rewrite::{RecordKind, RecordRewriter};
