//! Ledger lifecycle operations.

use super::with_pagination;
use crate::error::QldbError;
use crate::types::*;
use aws_runtime::{resolve_path, Method, OperationRequest, ServiceClient};
use std::sync::Arc;
use tracing::info;

/// Service for creating, describing, updating and deleting ledgers.
pub struct LedgersService {
    client: Arc<ServiceClient>,
}

impl LedgersService {
    /// Create a new ledgers service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Create a ledger.
    pub async fn create_ledger(
        &self,
        request: CreateLedgerRequest,
    ) -> Result<CreateLedgerOutput, QldbError> {
        let op = OperationRequest::rest("CreateLedger", Method::Post, "/ledgers")
            .with_json_body(&request)?;

        let output: CreateLedgerOutput = self.client.invoke_json(op).await?;
        info!(ledger = %request.name, state = ?output.state, "Created ledger");
        Ok(output)
    }

    /// Delete a ledger. Deletion protection must be disabled first.
    pub async fn delete_ledger(&self, name: &str) -> Result<(), QldbError> {
        let path = resolve_path("/ledgers/{name}", &[("name", name)])?;
        let op = OperationRequest::rest("DeleteLedger", Method::Delete, path);

        self.client.invoke_empty(op).await?;
        info!(ledger = %name, "Deleted ledger");
        Ok(())
    }

    /// Describe a ledger.
    pub async fn describe_ledger(&self, name: &str) -> Result<DescribeLedgerOutput, QldbError> {
        let path = resolve_path("/ledgers/{name}", &[("name", name)])?;
        let op = OperationRequest::rest("DescribeLedger", Method::Get, path);

        Ok(self.client.invoke_json(op).await?)
    }

    /// List ledgers in the account and region.
    pub async fn list_ledgers(&self, request: ListRequest) -> Result<ListLedgersOutput, QldbError> {
        let op = with_pagination(
            OperationRequest::rest("ListLedgers", Method::Get, "/ledgers"),
            &request,
        );

        Ok(self.client.invoke_json(op).await?)
    }

    /// Update deletion protection or the encryption key of a ledger.
    pub async fn update_ledger(
        &self,
        request: UpdateLedgerRequest,
    ) -> Result<UpdateLedgerOutput, QldbError> {
        let path = resolve_path("/ledgers/{name}", &[("name", request.name.as_str())])?;
        let op = OperationRequest::rest("UpdateLedger", Method::Patch, path)
            .with_json_body(&request)?;

        Ok(self.client.invoke_json(op).await?)
    }
}
