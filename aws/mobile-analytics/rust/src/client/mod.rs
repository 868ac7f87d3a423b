//! Mobile Analytics client and builder.

use crate::analytics::EventClient;
use crate::context::ClientContext;
use crate::error::MobileAnalyticsError;
use crate::services::EventsService;
use aws_runtime::{HttpTransport, Protocol, ServiceClient, ServiceConfig, ServiceMetadata};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Service constants for Mobile Analytics.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Mobile Analytics",
    signing_name: "mobileanalytics",
    endpoint_prefix: "mobileanalytics",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    api_version: "2014-06-05",
    env_suffix: "MOBILE_ANALYTICS",
};

/// Mobile Analytics client trait.
pub trait MobileAnalyticsClient: Send + Sync {
    /// Get the raw `PutEvents` service.
    fn events(&self) -> &EventsService;

    /// Create an event recording client for an app install.
    fn event_client(&self, context: ClientContext) -> Result<EventClient, MobileAnalyticsError>;

    /// Get the client configuration.
    fn config(&self) -> &ServiceConfig;
}

/// Mobile Analytics client implementation.
pub struct MobileAnalyticsClientImpl {
    inner: Arc<ServiceClient>,
    events: OnceCell<EventsService>,
}

impl MobileAnalyticsClientImpl {
    /// Wrap an existing service client.
    pub fn new(inner: Arc<ServiceClient>) -> Self {
        Self {
            inner,
            events: OnceCell::new(),
        }
    }

    /// Create a builder.
    pub fn builder() -> MobileAnalyticsClientBuilder {
        MobileAnalyticsClientBuilder::new()
    }
}

impl MobileAnalyticsClient for MobileAnalyticsClientImpl {
    fn events(&self) -> &EventsService {
        self.events
            .get_or_init(|| EventsService::new(self.inner.clone()))
    }

    fn event_client(&self, context: ClientContext) -> Result<EventClient, MobileAnalyticsError> {
        EventClient::new(self.inner.clone(), context)
    }

    fn config(&self) -> &ServiceConfig {
        self.inner.config()
    }
}

impl std::fmt::Debug for MobileAnalyticsClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobileAnalyticsClientImpl")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builder for the Mobile Analytics client.
pub struct MobileAnalyticsClientBuilder {
    config: Option<ServiceConfig>,
    from_env: bool,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl MobileAnalyticsClientBuilder {
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
    pub fn build(self) -> Result<MobileAnalyticsClientImpl, MobileAnalyticsError> {
        let config = if let Some(config) = self.config {
            config
        } else if self.from_env {
            ServiceConfig::builder().from_env().build()?
        } else {
            ServiceConfig::default()
        };

        let inner = ServiceClient::from_config(config, METADATA, self.transport)?;
        Ok(MobileAnalyticsClientImpl::new(Arc::new(inner)))
    }
}

impl Default for MobileAnalyticsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
