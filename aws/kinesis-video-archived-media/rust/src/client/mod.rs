//! Kinesis Video Archived Media client and builder.

use crate::error::KinesisVideoArchivedMediaError;
use crate::services::{FragmentsService, StreamingService};
use aws_runtime::{HttpTransport, Protocol, ServiceClient, ServiceConfig, ServiceMetadata};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Service constants for Kinesis Video Archived Media.
///
/// Requests must reach the stream's data endpoint (from the Kinesis Video
/// `GetDataEndpoint` API); pass it as the config endpoint.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Kinesis Video Archived Media",
    signing_name: "kinesisvideo",
    endpoint_prefix: "kinesisvideo",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    api_version: "2017-09-30",
    env_suffix: "KINESIS_VIDEO_ARCHIVED_MEDIA",
};

/// Kinesis Video Archived Media client trait.
pub trait KinesisVideoArchivedMediaClient: Send + Sync {
    /// Get the streaming sessions and clips service.
    fn streaming(&self) -> &StreamingService;

    /// Get the fragments service.
    fn fragments(&self) -> &FragmentsService;

    /// Get the client configuration.
    fn config(&self) -> &ServiceConfig;
}

/// Kinesis Video Archived Media client implementation.
pub struct KinesisVideoArchivedMediaClientImpl {
    inner: Arc<ServiceClient>,

    // Lazy-initialized services
    streaming: OnceCell<StreamingService>,
    fragments: OnceCell<FragmentsService>,
}

impl KinesisVideoArchivedMediaClientImpl {
    /// Wrap an existing service client.
    pub fn new(inner: Arc<ServiceClient>) -> Self {
        Self {
            inner,
            streaming: OnceCell::new(),
            fragments: OnceCell::new(),
        }
    }

    /// Create a builder.
    pub fn builder() -> KinesisVideoArchivedMediaClientBuilder {
        KinesisVideoArchivedMediaClientBuilder::new()
    }
}

impl KinesisVideoArchivedMediaClient for KinesisVideoArchivedMediaClientImpl {
    fn streaming(&self) -> &StreamingService {
        self.streaming
            .get_or_init(|| StreamingService::new(self.inner.clone()))
    }

    fn fragments(&self) -> &FragmentsService {
        self.fragments
            .get_or_init(|| FragmentsService::new(self.inner.clone()))
    }

    fn config(&self) -> &ServiceConfig {
        self.inner.config()
    }
}

impl std::fmt::Debug for KinesisVideoArchivedMediaClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KinesisVideoArchivedMediaClientImpl")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builder for the Kinesis Video Archived Media client.
pub struct KinesisVideoArchivedMediaClientBuilder {
    config: Option<ServiceConfig>,
    from_env: bool,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl KinesisVideoArchivedMediaClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            from_env: false,
            transport: None,
        }
    }

    /// Use the provided configuration.
    pub fn config(mut self, config: ServiceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Use a custom HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<KinesisVideoArchivedMediaClientImpl, KinesisVideoArchivedMediaError> {
        let config = if let Some(config) = self.config {
            config
        } else if self.from_env {
            ServiceConfig::builder().from_env().build()?
        } else {
            ServiceConfig::default()
        };

        let inner = ServiceClient::from_config(config, METADATA, self.transport)?;
        Ok(KinesisVideoArchivedMediaClientImpl::new(Arc::new(inner)))
    }
}

impl Default for KinesisVideoArchivedMediaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
