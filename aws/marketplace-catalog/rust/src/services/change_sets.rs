//! Change set operations.

use super::require;
use crate::error::MarketplaceCatalogError;
use crate::types::*;
use aws_runtime::{AwsError, Method, OperationRequest, ServiceClient};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service for starting, tracking and cancelling change sets.
pub struct ChangeSetsService {
    client: Arc<ServiceClient>,
}

impl ChangeSetsService {
    /// Create a new change sets service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Submit a change set. Changes are applied asynchronously.
    pub async fn start_change_set(
        &self,
        mut request: StartChangeSetRequest,
    ) -> Result<StartChangeSetOutput, MarketplaceCatalogError> {
        require("Catalog", &request.catalog)?;
        if request.change_set.is_empty() {
            return Err(AwsError::validation("ChangeSet must contain at least one change").into());
        }
        if request.client_request_token.is_none() {
            request.client_request_token = Some(Uuid::new_v4().to_string());
        }

        let op = OperationRequest::rest("StartChangeSet", Method::Post, "/StartChangeSet")
            .with_json_body(&request)?;

        let output: StartChangeSetOutput = self.client.invoke_json(op).await?;
        info!(
            changes = request.change_set.len(),
            change_set = ?output.change_set_id,
            "Started change set"
        );
        Ok(output)
    }

    /// Cancel a change set that is still being prepared or applied.
    pub async fn cancel_change_set(
        &self,
        catalog: &str,
        change_set_id: &str,
    ) -> Result<CancelChangeSetOutput, MarketplaceCatalogError> {
        require("Catalog", catalog)?;
        require("ChangeSetId", change_set_id)?;
        let op = OperationRequest::rest("CancelChangeSet", Method::Patch, "/CancelChangeSet")
            .with_query("catalog", catalog)
            .with_query("changeSetId", change_set_id);

        let output: CancelChangeSetOutput = self.client.invoke_json(op).await?;
        info!(change_set = %change_set_id, "Cancelled change set");
        Ok(output)
    }

    /// Describe a change set and the errors of its changes.
    pub async fn describe_change_set(
        &self,
        catalog: &str,
        change_set_id: &str,
    ) -> Result<DescribeChangeSetOutput, MarketplaceCatalogError> {
        require("Catalog", catalog)?;
        require("ChangeSetId", change_set_id)?;
        let op = OperationRequest::rest("DescribeChangeSet", Method::Get, "/DescribeChangeSet")
            .with_query("catalog", catalog)
            .with_query("changeSetId", change_set_id);

        Ok(self.client.invoke_json(op).await?)
    }

    /// List change sets.
    pub async fn list_change_sets(
        &self,
        request: ListChangeSetsRequest,
    ) -> Result<ListChangeSetsOutput, MarketplaceCatalogError> {
        require("Catalog", &request.catalog)?;
        let op = OperationRequest::rest("ListChangeSets", Method::Post, "/ListChangeSets")
            .with_json_body(&request)?;

        Ok(self.client.invoke_json(op).await?)
    }
}
