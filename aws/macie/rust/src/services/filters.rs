//! Findings filters.

use super::{ensure_client_token, with_pagination};
use crate::error::MacieError;
use crate::types::*;
use aws_runtime::{resolve_path, Method, OperationRequest, ServiceClient};
use std::sync::Arc;
use tracing::info;

/// Service for saved findings filters and suppression rules.
pub struct FindingsFiltersService {
    client: Arc<ServiceClient>,
}

impl FindingsFiltersService {
    /// Create a new findings filters service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Create a findings filter.
    pub async fn create_findings_filter(
        &self,
        mut request: CreateFindingsFilterRequest,
    ) -> Result<CreateFindingsFilterOutput, MacieError> {
        ensure_client_token(&mut request.client_token);
        let op = OperationRequest::rest("CreateFindingsFilter", Method::Post, "/findingsfilters")
            .with_json_body(&request)?;

        let output: CreateFindingsFilterOutput = self.client.invoke_json(op).await?;
        info!(filter = %request.name, id = ?output.id, "Created findings filter");
        Ok(output)
    }

    /// List findings filters.
    pub async fn list_findings_filters(
        &self,
        request: ListRequest,
    ) -> Result<ListFindingsFiltersOutput, MacieError> {
        let op = with_pagination(
            OperationRequest::rest("ListFindingsFilters", Method::Get, "/findingsfilters"),
            &request,
        );
        Ok(self.client.invoke_json(op).await?)
    }

    /// Get a findings filter.
    pub async fn get_findings_filter(&self, id: &str) -> Result<GetFindingsFilterOutput, MacieError> {
        let path = resolve_path("/findingsfilters/{id}", &[("id", id)])?;
        let op = OperationRequest::rest("GetFindingsFilter", Method::Get, path);
        Ok(self.client.invoke_json(op).await?)
    }

    /// Update a findings filter.
    pub async fn update_findings_filter(
        &self,
        mut request: UpdateFindingsFilterRequest,
    ) -> Result<UpdateFindingsFilterOutput, MacieError> {
        ensure_client_token(&mut request.client_token);
        let path = resolve_path("/findingsfilters/{id}", &[("id", request.id.as_str())])?;
        let op = OperationRequest::rest("UpdateFindingsFilter", Method::Patch, path)
            .with_json_body(&request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Delete a findings filter.
    pub async fn delete_findings_filter(&self, id: &str) -> Result<(), MacieError> {
        let path = resolve_path("/findingsfilters/{id}", &[("id", id)])?;
        let op = OperationRequest::rest("DeleteFindingsFilter", Method::Delete, path);

        self.client.invoke_empty(op).await?;
        info!(id = %id, "Deleted findings filter");
        Ok(())
    }
}
