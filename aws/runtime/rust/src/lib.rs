//! Shared runtime for AWS JSON service integrations.
//!
//! Every service crate in this workspace is a thin, typed layer over this
//! runtime. The runtime owns everything that is the same across services:
//!
//! - **Configuration**: region, credentials, endpoint resolution, timeouts
//! - **AWS Signature V4**: canonical requests and header signing
//! - **Transport**: reqwest-backed HTTP with a mockable trait seam
//! - **Protocols**: REST-JSON and AWS JSON 1.0/1.1 request marshalling
//! - **Errors**: structured service errors parsed from JSON error bodies
//! - **Resilience**: retries with exponential backoff and jitter
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_runtime::{Method, OperationRequest, ServiceClient, ServiceConfig, ServiceMetadata, Protocol};
//!
//! const LEDGERS: ServiceMetadata = ServiceMetadata {
//!     service_name: "QLDB",
//!     signing_name: "qldb",
//!     endpoint_prefix: "qldb",
//!     protocol: Protocol::RestJson1,
//!     target_prefix: None,
//!     api_version: "2019-01-02",
//!     env_suffix: "QLDB",
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aws_runtime::AwsError> {
//!     let config = ServiceConfig::builder().from_env().build()?;
//!     let client = ServiceClient::from_config(config, LEDGERS, None)?;
//!
//!     let ledger: serde_json::Value = client
//!         .invoke_json(OperationRequest::rest("DescribeLedger", Method::Get, "/ledgers/books"))
//!         .await?;
//!     println!("{}", ledger);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod codec;
pub mod config;
pub mod credentials;
pub mod error;
pub mod mocks;
pub mod protocol;
pub mod resilience;
pub mod signing;
pub mod transport;

// Re-export main types at crate root
pub use client::{Payload, ServiceClient};
pub use config::{ServiceConfig, ServiceConfigBuilder, ServiceMetadata};
pub use credentials::{
    resolve_credentials, AwsCredentials, CredentialsProvider, EnvCredentialsProvider,
    StaticCredentialsProvider,
};
pub use error::{
    AwsError, ConfigurationError, CredentialsError, NetworkError, RequestError, ResponseError,
    ServiceError, SigningError,
};
pub use protocol::{decode_json, resolve_path, Method, OperationRequest, Protocol};
pub use resilience::{RetryConfig, RetryPolicy};
pub use signing::{AwsSigner, SigV4Signer, SignedRequest};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, AwsError>;
