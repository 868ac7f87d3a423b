//! QLDB client and builder.

use crate::error::QldbError;
use crate::services::{ExportsService, JournalService, LedgersService, StreamsService, TagsService};
use aws_runtime::{HttpTransport, Protocol, ServiceClient, ServiceConfig, ServiceMetadata};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Service constants for QLDB.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "QLDB",
    signing_name: "qldb",
    endpoint_prefix: "qldb",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    api_version: "2019-01-02",
    env_suffix: "QLDB",
};

/// QLDB client trait.
pub trait QldbClient: Send + Sync {
    /// Get the ledgers service.
    fn ledgers(&self) -> &LedgersService;

    /// Get the S3 exports service.
    fn exports(&self) -> &ExportsService;

    /// Get the Kinesis streams service.
    fn streams(&self) -> &StreamsService;

    /// Get the journal verification service.
    fn journal(&self) -> &JournalService;

    /// Get the tagging service.
    fn tags(&self) -> &TagsService;

    /// Get the client configuration.
    fn config(&self) -> &ServiceConfig;
}

/// QLDB client implementation.
pub struct QldbClientImpl {
    inner: Arc<ServiceClient>,

    // Lazy-initialized services
    ledgers: OnceCell<LedgersService>,
    exports: OnceCell<ExportsService>,
    streams: OnceCell<StreamsService>,
    journal: OnceCell<JournalService>,
    tags: OnceCell<TagsService>,
}

impl QldbClientImpl {
    /// Wrap an existing service client.
    pub fn new(inner: Arc<ServiceClient>) -> Self {
        Self {
            inner,
            ledgers: OnceCell::new(),
            exports: OnceCell::new(),
            streams: OnceCell::new(),
            journal: OnceCell::new(),
            tags: OnceCell::new(),
        }
    }

    /// Create a builder.
    pub fn builder() -> QldbClientBuilder {
        QldbClientBuilder::new()
    }
}

impl QldbClient for QldbClientImpl {
    fn ledgers(&self) -> &LedgersService {
        self.ledgers
            .get_or_init(|| LedgersService::new(self.inner.clone()))
    }

    fn exports(&self) -> &ExportsService {
        self.exports
            .get_or_init(|| ExportsService::new(self.inner.clone()))
    }

    fn streams(&self) -> &StreamsService {
        self.streams
            .get_or_init(|| StreamsService::new(self.inner.clone()))
    }

    fn journal(&self) -> &JournalService {
        self.journal
            .get_or_init(|| JournalService::new(self.inner.clone()))
    }

    fn tags(&self) -> &TagsService {
        self.tags.get_or_init(|| TagsService::new(self.inner.clone()))
    }

    fn config(&self) -> &ServiceConfig {
        self.inner.config()
    }
}

impl std::fmt::Debug for QldbClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QldbClientImpl")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builder for the QLDB client.
pub struct QldbClientBuilder {
    config: Option<ServiceConfig>,
    from_env: bool,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl QldbClientBuilder {
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

    /// Build the QLDB client.
    pub fn build(self) -> Result<QldbClientImpl, QldbError> {
        let config = if let Some(config) = self.config {
            config
        } else if self.from_env {
            ServiceConfig::builder().from_env().build()?
        } else {
            ServiceConfig::default()
        };

        let inner = ServiceClient::from_config(config, METADATA, self.transport)?;
        Ok(QldbClientImpl::new(Arc::new(inner)))
    }
}

impl Default for QldbClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_runtime::mocks::MockTransport;

    #[test]
    fn test_builder_with_config() {
        let config = ServiceConfig::builder()
            .region("eu-central-1")
            .endpoint("https://qldb.eu-central-1.amazonaws.com")
            .build()
            .unwrap();

        let client = QldbClientBuilder::new()
            .config(config)
            .transport(Arc::new(MockTransport::new()))
            .build()
            .unwrap();

        assert_eq!(client.config().region, "eu-central-1");
    }

    #[test]
    fn test_default_endpoint() {
        let config = ServiceConfig::builder().region("ap-south-1").build().unwrap();
        let endpoint = config.resolve_endpoint(&METADATA).unwrap();
        if std::env::var(METADATA.endpoint_env_var()).is_err() {
            assert_eq!(endpoint.as_str(), "https://qldb.ap-south-1.amazonaws.com/");
        }
    }
}
