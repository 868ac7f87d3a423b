//! Journal blocks, digests and revisions for verification.

use crate::error::QldbError;
use crate::types::*;
use aws_runtime::{resolve_path, Method, OperationRequest, ServiceClient};
use std::sync::Arc;

/// Service for reading journal data used in cryptographic verification.
pub struct JournalService {
    client: Arc<ServiceClient>,
}

impl JournalService {
    /// Create a new journal service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Get a journal block, with a proof when a digest tip is given.
    pub async fn get_block(&self, request: GetBlockRequest) -> Result<GetBlockOutput, QldbError> {
        let path = resolve_path("/ledgers/{name}/block", &[("name", request.name.as_str())])?;
        let op = OperationRequest::rest("GetBlock", Method::Post, path).with_json_body(&request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Get the digest of a ledger at the latest committed block.
    pub async fn get_digest(&self, name: &str) -> Result<GetDigestOutput, QldbError> {
        let path = resolve_path("/ledgers/{name}/digest", &[("name", name)])?;
        let op = OperationRequest::rest("GetDigest", Method::Post, path);

        Ok(self.client.invoke_json(op).await?)
    }

    /// Get a document revision, with a proof when a digest tip is given.
    pub async fn get_revision(
        &self,
        request: GetRevisionRequest,
    ) -> Result<GetRevisionOutput, QldbError> {
        let path = resolve_path("/ledgers/{name}/revision", &[("name", request.name.as_str())])?;
        let op =
            OperationRequest::rest("GetRevision", Method::Post, path).with_json_body(&request)?;

        Ok(self.client.invoke_json(op).await?)
    }
}
