//! Configuration shared by every service client.
//!
//! [`ServiceConfig`] carries region, credentials, endpoint override, timeouts
//! and retry settings. Service crates pair it with a [`ServiceMetadata`]
//! constant to resolve endpoints and signing scope.

mod metadata;

pub use metadata::ServiceMetadata;

use crate::credentials::{CredentialsProvider, EnvCredentialsProvider};
use crate::error::{AwsError, ConfigurationError};
use crate::resilience::RetryConfig;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Configuration for an AWS service client.
#[derive(Clone)]
pub struct ServiceConfig {
    /// AWS region (e.g., "us-east-1").
    pub region: String,

    /// Credentials provider.
    pub credentials_provider: Arc<dyn CredentialsProvider>,

    /// Explicit endpoint override. Wins over every other source.
    pub endpoint: Option<Url>,

    /// Endpoint from `AWS_ENDPOINT_URL`, consulted after the per-service
    /// variable.
    pub shared_endpoint: Option<Url>,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Read timeout for individual requests.
    pub read_timeout: Duration,

    /// Maximum number of retries for transient failures.
    pub max_retries: u32,

    /// Initial backoff delay for retries.
    pub initial_backoff: Duration,

    /// Maximum backoff delay.
    pub max_backoff: Duration,

    /// Backoff multiplier for exponential backoff.
    pub backoff_multiplier: f64,

    /// Randomize backoff delays.
    pub use_jitter: bool,

    /// Maximum idle connections kept per host.
    pub max_connections: u32,

    /// Idle connection timeout.
    pub idle_timeout: Duration,

    /// Verify SSL certificates.
    pub verify_ssl: bool,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("region", &self.region)
            .field("credentials_provider", &self.credentials_provider.name())
            .field("endpoint", &self.endpoint)
            .field("shared_endpoint", &self.shared_endpoint)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("max_retries", &self.max_retries)
            .field("max_connections", &self.max_connections)
            .field("verify_ssl", &self.verify_ssl)
            .finish_non_exhaustive()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            credentials_provider: Arc::new(EnvCredentialsProvider::new()),
            endpoint: None,
            shared_endpoint: None,
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(50),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(20),
            backoff_multiplier: 2.0,
            use_jitter: true,
            max_connections: 50,
            idle_timeout: Duration::from_secs(60),
            verify_ssl: true,
        }
    }
}

impl ServiceConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Resolve the base endpoint for a service.
    ///
    /// Order: explicit override, `AWS_ENDPOINT_URL_<SUFFIX>`,
    /// `AWS_ENDPOINT_URL`, then the regional default.
    pub fn resolve_endpoint(&self, metadata: &ServiceMetadata) -> Result<Url, AwsError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }

        if let Ok(value) = std::env::var(metadata.endpoint_env_var()) {
            if !value.is_empty() {
                return parse_endpoint(&value);
            }
        }

        if let Some(endpoint) = &self.shared_endpoint {
            return Ok(endpoint.clone());
        }

        parse_endpoint(&format!("https://{}", metadata.default_host(&self.region)))
    }

    /// Retry settings derived from this configuration.
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::new(self.max_retries)
            .with_initial_backoff(self.initial_backoff)
            .with_max_backoff(self.max_backoff)
            .with_multiplier(self.backoff_multiplier)
            .with_jitter(self.use_jitter)
    }
}

fn parse_endpoint(value: &str) -> Result<Url, AwsError> {
    let url = Url::parse(value).map_err(|e| {
        AwsError::Configuration(ConfigurationError::InvalidEndpoint {
            url: value.to_string(),
            details: e.to_string(),
        })
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AwsError::Configuration(ConfigurationError::InvalidEndpoint {
            url: value.to_string(),
            details: format!("unsupported scheme '{}'", url.scheme()),
        }));
    }

    Ok(url)
}

/// Builder for service configuration.
#[derive(Default)]
pub struct ServiceConfigBuilder {
    region: Option<String>,
    credentials_provider: Option<Arc<dyn CredentialsProvider>>,
    endpoint: Option<String>,
    shared_endpoint: Option<String>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    max_retries: Option<u32>,
    initial_backoff: Option<Duration>,
    max_backoff: Option<Duration>,
    backoff_multiplier: Option<f64>,
    use_jitter: Option<bool>,
    max_connections: Option<u32>,
    idle_timeout: Option<Duration>,
    verify_ssl: Option<bool>,
}

impl ServiceConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the credentials provider.
    pub fn credentials_provider(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials_provider = Some(provider);
        self
    }

    /// Set a custom endpoint URL. Validated by [`build`](Self::build).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the initial backoff delay.
    pub fn initial_backoff(mut self, delay: Duration) -> Self {
        self.initial_backoff = Some(delay);
        self
    }

    /// Set the maximum backoff delay.
    pub fn max_backoff(mut self, delay: Duration) -> Self {
        self.max_backoff = Some(delay);
        self
    }

    /// Set the backoff multiplier.
    pub fn backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = Some(multiplier);
        self
    }

    /// Enable or disable backoff jitter.
    pub fn jitter(mut self, enabled: bool) -> Self {
        self.use_jitter = Some(enabled);
        self
    }

    /// Set the maximum idle connections per host.
    pub fn max_connections(mut self, connections: u32) -> Self {
        self.max_connections = Some(connections);
        self
    }

    /// Set the idle connection timeout.
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    /// Enable or disable SSL verification.
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        if let Ok(region) = std::env::var("AWS_REGION") {
            self.region = Some(region);
        } else if let Ok(region) = std::env::var("AWS_DEFAULT_REGION") {
            self.region = Some(region);
        }

        if let Ok(endpoint) = std::env::var("AWS_ENDPOINT_URL") {
            if !endpoint.is_empty() {
                self.shared_endpoint = Some(endpoint);
            }
        }

        // AWS_MAX_ATTEMPTS counts the first attempt.
        if let Ok(val) = std::env::var("AWS_MAX_ATTEMPTS") {
            if let Ok(attempts) = val.parse::<u32>() {
                self.max_retries = Some(attempts.saturating_sub(1));
            }
        }

        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<ServiceConfig, AwsError> {
        let defaults = ServiceConfig::default();

        let region = self.region.unwrap_or(defaults.region);
        if region.is_empty() {
            return Err(AwsError::Configuration(ConfigurationError::MissingRegion));
        }
        if !region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(AwsError::Configuration(ConfigurationError::InvalidRegion {
                region,
            }));
        }

        let endpoint = self.endpoint.as_deref().map(parse_endpoint).transpose()?;
        let shared_endpoint = self
            .shared_endpoint
            .as_deref()
            .map(parse_endpoint)
            .transpose()?;

        let initial_backoff = self.initial_backoff.unwrap_or(defaults.initial_backoff);
        let max_backoff = self.max_backoff.unwrap_or(defaults.max_backoff);
        if max_backoff < initial_backoff {
            return Err(AwsError::Configuration(
                ConfigurationError::InvalidConfiguration {
                    field: "max_backoff".to_string(),
                    message: "must not be shorter than initial_backoff".to_string(),
                },
            ));
        }

        Ok(ServiceConfig {
            region,
            credentials_provider: self
                .credentials_provider
                .unwrap_or(defaults.credentials_provider),
            endpoint,
            shared_endpoint,
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            read_timeout: self.read_timeout.unwrap_or(defaults.read_timeout),
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            initial_backoff,
            max_backoff,
            backoff_multiplier: self.backoff_multiplier.unwrap_or(defaults.backoff_multiplier),
            use_jitter: self.use_jitter.unwrap_or(defaults.use_jitter),
            max_connections: self.max_connections.unwrap_or(defaults.max_connections),
            idle_timeout: self.idle_timeout.unwrap_or(defaults.idle_timeout),
            verify_ssl: self.verify_ssl.unwrap_or(defaults.verify_ssl),
        })
    }
}
