//! Service implementations for Macie operations.

mod accounts;
mod buckets;
mod filters;
mod findings;
mod identifiers;
mod jobs;
mod organization;
mod session;
mod tags;
mod usage;

pub use accounts::AccountsService;
pub use buckets::BucketsService;
pub use filters::FindingsFiltersService;
pub use findings::FindingsService;
pub use identifiers::CustomDataIdentifiersService;
pub use jobs::ClassificationJobsService;
pub use organization::OrganizationService;
pub use session::SessionService;
pub use tags::TagsService;
pub use usage::UsageService;

use crate::types::ListRequest;
use aws_runtime::OperationRequest;
use uuid::Uuid;

/// Attach `maxResults` / `nextToken` query parameters.
pub(crate) fn with_pagination(op: OperationRequest, list: &ListRequest) -> OperationRequest {
    op.with_query_opt("maxResults", list.max_results)
        .with_query_opt("nextToken", list.next_token.as_deref())
}

/// Fill an unset idempotency token with a random UUID.
pub(crate) fn ensure_client_token(token: &mut Option<String>) {
    if token.is_none() {
        *token = Some(Uuid::new_v4().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_token_generated_once() {
        let mut token = None;
        ensure_client_token(&mut token);
        let generated = token.clone().unwrap();
        assert!(Uuid::parse_str(&generated).is_ok());

        ensure_client_token(&mut token);
        assert_eq!(token.as_deref(), Some(generated.as_str()));
    }

    #[test]
    fn test_caller_token_kept() {
        let mut token = Some("caller-token".to_string());
        ensure_client_token(&mut token);
        assert_eq!(token.as_deref(), Some("caller-token"));
    }
}
