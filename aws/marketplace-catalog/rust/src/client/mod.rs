//! Marketplace Catalog client and builder.

use crate::error::MarketplaceCatalogError;
use crate::services::{ChangeSetsService, EntitiesService};
use aws_runtime::{HttpTransport, Protocol, ServiceClient, ServiceConfig, ServiceMetadata};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Service constants for AWS Marketplace Catalog.
///
/// The endpoint host is `catalog.marketplace.{region}.amazonaws.com` while
/// requests are signed for `aws-marketplace`.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Marketplace Catalog",
    signing_name: "aws-marketplace",
    endpoint_prefix: "catalog.marketplace",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    api_version: "2018-09-17",
    env_suffix: "MARKETPLACE_CATALOG",
};

/// Marketplace Catalog client trait.
pub trait MarketplaceCatalogClient: Send + Sync {
    /// Get the change sets service.
    fn change_sets(&self) -> &ChangeSetsService;

    /// Get the entities service.
    fn entities(&self) -> &EntitiesService;

    /// Get the client configuration.
    fn config(&self) -> &ServiceConfig;
}

/// Marketplace Catalog client implementation.
pub struct MarketplaceCatalogClientImpl {
    inner: Arc<ServiceClient>,

    // Lazy-initialized services
    change_sets: OnceCell<ChangeSetsService>,
    entities: OnceCell<EntitiesService>,
}

impl MarketplaceCatalogClientImpl {
    /// Wrap an existing service client.
    pub fn new(inner: Arc<ServiceClient>) -> Self {
        Self {
            inner,
            change_sets: OnceCell::new(),
            entities: OnceCell::new(),
        }
    }

    /// Create a builder.
    pub fn builder() -> MarketplaceCatalogClientBuilder {
        MarketplaceCatalogClientBuilder::new()
    }
}

impl MarketplaceCatalogClient for MarketplaceCatalogClientImpl {
    fn change_sets(&self) -> &ChangeSetsService {
        self.change_sets
            .get_or_init(|| ChangeSetsService::new(self.inner.clone()))
    }

    fn entities(&self) -> &EntitiesService {
        self.entities
            .get_or_init(|| EntitiesService::new(self.inner.clone()))
    }

    fn config(&self) -> &ServiceConfig {
        self.inner.config()
    }
}

impl std::fmt::Debug for MarketplaceCatalogClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketplaceCatalogClientImpl")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builder for the Marketplace Catalog client.
pub struct MarketplaceCatalogClientBuilder {
    config: Option<ServiceConfig>,
    from_env: bool,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl MarketplaceCatalogClientBuilder {
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
    pub fn build(self) -> Result<MarketplaceCatalogClientImpl, MarketplaceCatalogError> {
        let config = if let Some(config) = self.config {
            config
        } else if self.from_env {
            ServiceConfig::builder().from_env().build()?
        } else {
            ServiceConfig::default()
        };

        let inner = ServiceClient::from_config(config, METADATA, self.transport)?;
        Ok(MarketplaceCatalogClientImpl::new(Arc::new(inner)))
    }
}

impl Default for MarketplaceCatalogClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
