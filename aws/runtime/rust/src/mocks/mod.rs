//! Mock implementations for testing.
//!
//! Service crates use these in their integration tests to run operations
//! without network access and to assert on the requests they produce.

mod credentials;
mod signer;
mod transport;

pub use credentials::MockCredentialsProvider;
pub use signer::{MockSigner, SignRequest};
pub use transport::{MockResponse, MockTransport};

use crate::client::ServiceClient;
use crate::config::{ServiceConfig, ServiceMetadata};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Configuration for tests: fixed region, mock credentials, fast retries.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        region: "us-east-1".to_string(),
        credentials_provider: Arc::new(MockCredentialsProvider::new()),
        initial_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(2),
        use_jitter: false,
        ..ServiceConfig::default()
    }
}

/// Service client wired to a mock transport and a [`MockSigner`].
///
/// The endpoint is pinned to `https://mock.amazonaws.test` so environment
/// overrides never leak into tests.
pub fn mock_service_client(
    metadata: ServiceMetadata,
    transport: Arc<MockTransport>,
) -> Arc<ServiceClient> {
    let endpoint = Url::parse(MOCK_ENDPOINT).expect("mock endpoint is a valid URL");
    Arc::new(ServiceClient::with_endpoint(
        test_config(),
        metadata,
        endpoint,
        transport,
        Arc::new(MockSigner::new()),
    ))
}

/// Base URL used by [`mock_service_client`].
pub const MOCK_ENDPOINT: &str = "https://mock.amazonaws.test";
