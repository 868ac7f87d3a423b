//! Macie client and builder.

use crate::error::MacieError;
use crate::services::{
    AccountsService, BucketsService, ClassificationJobsService, CustomDataIdentifiersService,
    FindingsFiltersService, FindingsService, OrganizationService, SessionService, TagsService,
    UsageService,
};
use aws_runtime::{HttpTransport, Protocol, ServiceClient, ServiceConfig, ServiceMetadata};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Service constants for Amazon Macie.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Macie2",
    signing_name: "macie2",
    endpoint_prefix: "macie2",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    api_version: "2020-01-01",
    env_suffix: "MACIE2",
};

/// Macie client trait.
pub trait MacieClient: Send + Sync {
    /// Account enablement and export configuration.
    fn session(&self) -> &SessionService;

    /// Findings and statistics.
    fn findings(&self) -> &FindingsService;

    /// Findings filters.
    fn findings_filters(&self) -> &FindingsFiltersService;

    /// Classification jobs.
    fn classification_jobs(&self) -> &ClassificationJobsService;

    /// Custom data identifiers.
    fn custom_data_identifiers(&self) -> &CustomDataIdentifiersService;

    /// Members and invitations.
    fn accounts(&self) -> &AccountsService;

    /// Organization administration.
    fn organization(&self) -> &OrganizationService;

    /// S3 bucket inventory.
    fn buckets(&self) -> &BucketsService;

    /// Usage statistics.
    fn usage(&self) -> &UsageService;

    /// Resource tags.
    fn tags(&self) -> &TagsService;

    /// Get the client configuration.
    fn config(&self) -> &ServiceConfig;
}

/// Macie client implementation.
pub struct MacieClientImpl {
    inner: Arc<ServiceClient>,

    // Lazy-initialized services
    session: OnceCell<SessionService>,
    findings: OnceCell<FindingsService>,
    findings_filters: OnceCell<FindingsFiltersService>,
    classification_jobs: OnceCell<ClassificationJobsService>,
    custom_data_identifiers: OnceCell<CustomDataIdentifiersService>,
    accounts: OnceCell<AccountsService>,
    organization: OnceCell<OrganizationService>,
    buckets: OnceCell<BucketsService>,
    usage: OnceCell<UsageService>,
    tags: OnceCell<TagsService>,
}

impl MacieClientImpl {
    /// Wrap an existing service client.
    pub fn new(inner: Arc<ServiceClient>) -> Self {
        Self {
            inner,
            session: OnceCell::new(),
            findings: OnceCell::new(),
            findings_filters: OnceCell::new(),
            classification_jobs: OnceCell::new(),
            custom_data_identifiers: OnceCell::new(),
            accounts: OnceCell::new(),
            organization: OnceCell::new(),
            buckets: OnceCell::new(),
            usage: OnceCell::new(),
            tags: OnceCell::new(),
        }
    }

    /// Create a builder.
    pub fn builder() -> MacieClientBuilder {
        MacieClientBuilder::new()
    }
}

impl MacieClient for MacieClientImpl {
    fn session(&self) -> &SessionService {
        self.session
            .get_or_init(|| SessionService::new(self.inner.clone()))
    }

    fn findings(&self) -> &FindingsService {
        self.findings
            .get_or_init(|| FindingsService::new(self.inner.clone()))
    }

    fn findings_filters(&self) -> &FindingsFiltersService {
        self.findings_filters
            .get_or_init(|| FindingsFiltersService::new(self.inner.clone()))
    }

    fn classification_jobs(&self) -> &ClassificationJobsService {
        self.classification_jobs
            .get_or_init(|| ClassificationJobsService::new(self.inner.clone()))
    }

    fn custom_data_identifiers(&self) -> &CustomDataIdentifiersService {
        self.custom_data_identifiers
            .get_or_init(|| CustomDataIdentifiersService::new(self.inner.clone()))
    }

    fn accounts(&self) -> &AccountsService {
        self.accounts
            .get_or_init(|| AccountsService::new(self.inner.clone()))
    }

    fn organization(&self) -> &OrganizationService {
        self.organization
            .get_or_init(|| OrganizationService::new(self.inner.clone()))
    }

    fn buckets(&self) -> &BucketsService {
        self.buckets
            .get_or_init(|| BucketsService::new(self.inner.clone()))
    }

    fn usage(&self) -> &UsageService {
        self.usage.get_or_init(|| UsageService::new(self.inner.clone()))
    }

    fn tags(&self) -> &TagsService {
        self.tags.get_or_init(|| TagsService::new(self.inner.clone()))
    }

    fn config(&self) -> &ServiceConfig {
        self.inner.config()
    }
}

impl std::fmt::Debug for MacieClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacieClientImpl")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builder for the Macie client.
pub struct MacieClientBuilder {
    config: Option<ServiceConfig>,
    from_env: bool,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl MacieClientBuilder {
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
    pub fn build(self) -> Result<MacieClientImpl, MacieError> {
        let config = if let Some(config) = self.config {
            config
        } else if self.from_env {
            ServiceConfig::builder().from_env().build()?
        } else {
            ServiceConfig::default()
        };

        let inner = ServiceClient::from_config(config, METADATA, self.transport)?;
        Ok(MacieClientImpl::new(Arc::new(inner)))
    }
}

impl Default for MacieClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
