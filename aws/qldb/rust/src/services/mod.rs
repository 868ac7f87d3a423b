//! Service implementations for QLDB operations.

mod exports;
mod journal;
mod ledgers;
mod streams;
mod tags;

pub use exports::ExportsService;
pub use journal::JournalService;
pub use ledgers::LedgersService;
pub use streams::StreamsService;
pub use tags::TagsService;

use crate::types::ListRequest;
use aws_runtime::OperationRequest;

/// Attach `max_results` / `next_token` query parameters.
pub(crate) fn with_pagination(op: OperationRequest, list: &ListRequest) -> OperationRequest {
    op.with_query_opt("max_results", list.max_results)
        .with_query_opt("next_token", list.next_token.as_deref())
}
