//! Event submission.

use crate::error::MobileAnalyticsError;
use crate::types::PutEventsRequest;
use aws_runtime::{AwsError, Method, OperationRequest, ServiceClient};
use std::sync::Arc;
use tracing::debug;

/// Largest batch `PutEvents` accepts.
pub const MAX_EVENTS_PER_BATCH: usize = 100;

/// Service for `PutEvents`.
pub struct EventsService {
    client: Arc<ServiceClient>,
}

impl EventsService {
    /// Create a new events service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Record a batch of events. The service answers 202 with no body.
    pub async fn put_events(&self, request: PutEventsRequest) -> Result<(), MobileAnalyticsError> {
        if request.events.is_empty() {
            return Err(AwsError::validation("PutEvents requires at least one event").into());
        }
        if request.events.len() > MAX_EVENTS_PER_BATCH {
            return Err(AwsError::validation(format!(
                "PutEvents accepts at most {} events, got {}",
                MAX_EVENTS_PER_BATCH,
                request.events.len()
            ))
            .into());
        }
        if request.client_context.is_empty() {
            return Err(AwsError::validation("PutEvents requires a client context").into());
        }

        debug!(events = request.events.len(), "Putting events");

        let op = OperationRequest::rest("PutEvents", Method::Post, "/2014-06-05/events")
            .with_header("x-amz-Client-Context", request.client_context.as_str())
            .with_header_opt(
                "x-amz-Client-Context-Encoding",
                request.client_context_encoding.as_deref(),
            )
            .with_json_body(&request)?;

        Ok(self.client.invoke_empty(op).await?)
    }
}
