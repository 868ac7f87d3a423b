//! CodeStar Connections client and builder.

use crate::error::CodeStarConnectionsError;
use crate::services::{ConnectionsService, HostsService, TagsService};
use aws_runtime::{HttpTransport, Protocol, ServiceClient, ServiceConfig, ServiceMetadata};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Service constants for AWS CodeStar Connections.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "CodeStar connections",
    signing_name: "codestar-connections",
    endpoint_prefix: "codestar-connections",
    protocol: Protocol::AwsJson1_0,
    target_prefix: Some("com.amazonaws.codestar.connections.CodeStar_connections_20191201"),
    api_version: "2019-12-01",
    env_suffix: "CODESTAR_CONNECTIONS",
};

/// CodeStar Connections client trait.
pub trait CodeStarConnectionsClient: Send + Sync {
    /// Get the connections service.
    fn connections(&self) -> &ConnectionsService;

    /// Get the hosts service.
    fn hosts(&self) -> &HostsService;

    /// Get the tags service.
    fn tags(&self) -> &TagsService;

    /// Get the client configuration.
    fn config(&self) -> &ServiceConfig;
}

/// CodeStar Connections client implementation.
pub struct CodeStarConnectionsClientImpl {
    inner: Arc<ServiceClient>,

    // Lazy-initialized services
    connections: OnceCell<ConnectionsService>,
    hosts: OnceCell<HostsService>,
    tags: OnceCell<TagsService>,
}

impl CodeStarConnectionsClientImpl {
    /// Wrap an existing service client.
    pub fn new(inner: Arc<ServiceClient>) -> Self {
        Self {
            inner,
            connections: OnceCell::new(),
            hosts: OnceCell::new(),
            tags: OnceCell::new(),
        }
    }

    /// Create a builder.
    pub fn builder() -> CodeStarConnectionsClientBuilder {
        CodeStarConnectionsClientBuilder::new()
    }
}

impl CodeStarConnectionsClient for CodeStarConnectionsClientImpl {
    fn connections(&self) -> &ConnectionsService {
        self.connections
            .get_or_init(|| ConnectionsService::new(self.inner.clone()))
    }

    fn hosts(&self) -> &HostsService {
        self.hosts.get_or_init(|| HostsService::new(self.inner.clone()))
    }

    fn tags(&self) -> &TagsService {
        self.tags.get_or_init(|| TagsService::new(self.inner.clone()))
    }

    fn config(&self) -> &ServiceConfig {
        self.inner.config()
    }
}

impl std::fmt::Debug for CodeStarConnectionsClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeStarConnectionsClientImpl")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builder for the CodeStar Connections client.
pub struct CodeStarConnectionsClientBuilder {
    config: Option<ServiceConfig>,
    from_env: bool,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl CodeStarConnectionsClientBuilder {
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
    pub fn build(self) -> Result<CodeStarConnectionsClientImpl, CodeStarConnectionsError> {
        let config = if let Some(config) = self.config {
            config
        } else if self.from_env {
            ServiceConfig::builder().from_env().build()?
        } else {
            ServiceConfig::default()
        };

        let inner = ServiceClient::from_config(config, METADATA, self.transport)?;
        Ok(CodeStarConnectionsClientImpl::new(Arc::new(inner)))
    }
}

impl Default for CodeStarConnectionsClientBuilder {
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
            .build()
            .unwrap();

        let client = CodeStarConnectionsClientImpl::builder()
            .config(config)
            .transport(Arc::new(MockTransport::new()))
            .build()
            .unwrap();

        assert_eq!(client.config().region, "eu-central-1");
    }

    #[test]
    fn test_metadata_is_json_rpc() {
        assert_eq!(METADATA.protocol, Protocol::AwsJson1_0);
        assert!(METADATA.target_prefix.is_some());
    }
}
