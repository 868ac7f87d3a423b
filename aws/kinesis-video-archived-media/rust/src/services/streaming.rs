//! Playback sessions and clips.

use crate::error::KinesisVideoArchivedMediaError;
use crate::types::*;
use aws_runtime::{Method, OperationRequest, ServiceClient};
use std::sync::Arc;
use tracing::debug;

/// Service for HLS/DASH session URLs and MP4 clips.
pub struct StreamingService {
    client: Arc<ServiceClient>,
}

impl StreamingService {
    /// Create a new streaming service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Get an HLS master playlist URL for a stream.
    pub async fn get_hls_streaming_session_url(
        &self,
        request: GetHlsStreamingSessionUrlRequest,
    ) -> Result<GetHlsStreamingSessionUrlOutput, KinesisVideoArchivedMediaError> {
        request.validate()?;

        let op = OperationRequest::rest(
            "GetHLSStreamingSessionURL",
            Method::Post,
            "/getHLSStreamingSessionURL",
        )
        .with_json_body(&request)?;

        let output: GetHlsStreamingSessionUrlOutput = self.client.invoke_json(op).await?;
        debug!(
            has_url = output.hls_streaming_session_url.is_some(),
            "Created HLS session"
        );
        Ok(output)
    }

    /// Get a DASH manifest URL for a stream.
    pub async fn get_dash_streaming_session_url(
        &self,
        request: GetDashStreamingSessionUrlRequest,
    ) -> Result<GetDashStreamingSessionUrlOutput, KinesisVideoArchivedMediaError> {
        request.validate()?;

        let op = OperationRequest::rest(
            "GetDASHStreamingSessionURL",
            Method::Post,
            "/getDASHStreamingSessionURL",
        )
        .with_json_body(&request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Download an MP4 clip covering a time range.
    pub async fn get_clip(
        &self,
        request: GetClipRequest,
    ) -> Result<GetClipOutput, KinesisVideoArchivedMediaError> {
        request.validate()?;

        let op = OperationRequest::rest("GetClip", Method::Post, "/getClip")
            .with_json_body(&request)?;

        let payload = self.client.invoke_payload(op).await?;
        debug!(bytes = payload.body.len(), "Received clip");
        Ok(payload.into())
    }
}
