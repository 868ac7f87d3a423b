//! WorkLink client and builder.

use crate::error::WorkLinkError;
use crate::services::{
    AuthorizationProvidersService, CertificateAuthoritiesService, ConfigurationService,
    DevicesService, DomainsService, FleetsService, TagsService,
};
use aws_runtime::{HttpTransport, Protocol, ServiceClient, ServiceConfig, ServiceMetadata};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Service constants for Amazon WorkLink.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "WorkLink",
    signing_name: "worklink",
    endpoint_prefix: "worklink",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    api_version: "2018-09-25",
    env_suffix: "WORKLINK",
};

/// WorkLink client trait.
pub trait WorkLinkClient: Send + Sync {
    /// Get the fleets service.
    fn fleets(&self) -> &FleetsService;

    /// Get the fleet configuration service.
    fn configuration(&self) -> &ConfigurationService;

    /// Get the domains service.
    fn domains(&self) -> &DomainsService;

    /// Get the devices service.
    fn devices(&self) -> &DevicesService;

    /// Get the website authorization providers service.
    fn authorization_providers(&self) -> &AuthorizationProvidersService;

    /// Get the website certificate authorities service.
    fn certificate_authorities(&self) -> &CertificateAuthoritiesService;

    /// Get the tags service.
    fn tags(&self) -> &TagsService;

    /// Get the client configuration.
    fn config(&self) -> &ServiceConfig;
}

/// WorkLink client implementation.
pub struct WorkLinkClientImpl {
    inner: Arc<ServiceClient>,

    // Lazy-initialized services
    fleets: OnceCell<FleetsService>,
    configuration: OnceCell<ConfigurationService>,
    domains: OnceCell<DomainsService>,
    devices: OnceCell<DevicesService>,
    authorization_providers: OnceCell<AuthorizationProvidersService>,
    certificate_authorities: OnceCell<CertificateAuthoritiesService>,
    tags: OnceCell<TagsService>,
}

impl WorkLinkClientImpl {
    /// Wrap an existing service client.
    pub fn new(inner: Arc<ServiceClient>) -> Self {
        Self {
            inner,
            fleets: OnceCell::new(),
            configuration: OnceCell::new(),
            domains: OnceCell::new(),
            devices: OnceCell::new(),
            authorization_providers: OnceCell::new(),
            certificate_authorities: OnceCell::new(),
            tags: OnceCell::new(),
        }
    }

    /// Create a builder.
    pub fn builder() -> WorkLinkClientBuilder {
        WorkLinkClientBuilder::new()
    }
}

impl WorkLinkClient for WorkLinkClientImpl {
    fn fleets(&self) -> &FleetsService {
        self.fleets
            .get_or_init(|| FleetsService::new(self.inner.clone()))
    }

    fn configuration(&self) -> &ConfigurationService {
        self.configuration
            .get_or_init(|| ConfigurationService::new(self.inner.clone()))
    }

    fn domains(&self) -> &DomainsService {
        self.domains
            .get_or_init(|| DomainsService::new(self.inner.clone()))
    }

    fn devices(&self) -> &DevicesService {
        self.devices
            .get_or_init(|| DevicesService::new(self.inner.clone()))
    }

    fn authorization_providers(&self) -> &AuthorizationProvidersService {
        self.authorization_providers
            .get_or_init(|| AuthorizationProvidersService::new(self.inner.clone()))
    }

    fn certificate_authorities(&self) -> &CertificateAuthoritiesService {
        self.certificate_authorities
            .get_or_init(|| CertificateAuthoritiesService::new(self.inner.clone()))
    }

    fn tags(&self) -> &TagsService {
        self.tags.get_or_init(|| TagsService::new(self.inner.clone()))
    }

    fn config(&self) -> &ServiceConfig {
        self.inner.config()
    }
}

impl std::fmt::Debug for WorkLinkClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkLinkClientImpl")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builder for the WorkLink client.
pub struct WorkLinkClientBuilder {
    config: Option<ServiceConfig>,
    from_env: bool,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl WorkLinkClientBuilder {
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
    pub fn build(self) -> Result<WorkLinkClientImpl, WorkLinkError> {
        let config = if let Some(config) = self.config {
            config
        } else if self.from_env {
            ServiceConfig::builder().from_env().build()?
        } else {
            ServiceConfig::default()
        };

        let inner = ServiceClient::from_config(config, METADATA, self.transport)?;
        Ok(WorkLinkClientImpl::new(Arc::new(inner)))
    }
}

impl Default for WorkLinkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_runtime::mocks::MockTransport;

    #[test]
    fn test_builder_default_region() {
        let client = WorkLinkClientImpl::builder()
            .transport(Arc::new(MockTransport::new()))
            .build()
            .unwrap();

        assert_eq!(client.config().region, "us-east-1");
    }

    #[test]
    fn test_services_are_cached() {
        let client = WorkLinkClientImpl::builder()
            .transport(Arc::new(MockTransport::new()))
            .build()
            .unwrap();

        let first = client.domains() as *const DomainsService;
        let second = client.domains() as *const DomainsService;
        assert_eq!(first, second);
    }
}
