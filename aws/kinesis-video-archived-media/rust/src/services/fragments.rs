//! Fragment listing and retrieval.

use crate::error::KinesisVideoArchivedMediaError;
use crate::types::*;
use aws_runtime::{Method, OperationRequest, ServiceClient};
use std::sync::Arc;

/// Service for archived fragments.
pub struct FragmentsService {
    client: Arc<ServiceClient>,
}

impl FragmentsService {
    /// Create a new fragments service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// List fragments in a stream, optionally filtered by timestamp.
    pub async fn list_fragments(
        &self,
        request: ListFragmentsRequest,
    ) -> Result<ListFragmentsOutput, KinesisVideoArchivedMediaError> {
        request.validate()?;

        let op = OperationRequest::rest("ListFragments", Method::Post, "/listFragments")
            .with_json_body(&request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Fetch media for specific fragments as a Matroska stream.
    pub async fn get_media_for_fragment_list(
        &self,
        request: GetMediaForFragmentListRequest,
    ) -> Result<GetMediaForFragmentListOutput, KinesisVideoArchivedMediaError> {
        request.validate()?;

        let op = OperationRequest::rest(
            "GetMediaForFragmentList",
            Method::Post,
            "/getMediaForFragmentList",
        )
        .with_json_body(&request)?;

        Ok(self.client.invoke_payload(op).await?.into())
    }

    /// List every fragment matching the request, following pagination.
    pub async fn list_all_fragments(
        &self,
        mut request: ListFragmentsRequest,
    ) -> Result<Vec<Fragment>, KinesisVideoArchivedMediaError> {
        let mut fragments = Vec::new();
        loop {
            let page = self.list_fragments(request.clone()).await?;
            fragments.extend(page.fragments);
            match page.next_token {
                Some(token) if !token.is_empty() => request.next_token = Some(token),
                _ => return Ok(fragments),
            }
        }
    }
}
