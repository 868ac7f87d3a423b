//! AWS CodeStar Connections integration.
//!
//! Manage connections between AWS developer tools and third-party source
//! providers (Bitbucket, GitHub, GitHub Enterprise Server), and the hosts
//! that front self-managed providers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_codestar_connections::{
//!     CodeStarConnectionsClient, CodeStarConnectionsClientImpl, CreateConnectionRequest,
//!     ProviderType,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aws_codestar_connections::CodeStarConnectionsError> {
//!     let client = CodeStarConnectionsClientImpl::builder().from_env().build()?;
//!
//!     let created = client
//!         .connections()
//!         .create_connection(CreateConnectionRequest::new("my-github", ProviderType::GitHub))
//!         .await?;
//!
//!     println!("{:?}", created.connection_arn);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod services;
pub mod types;

pub use client::{
    CodeStarConnectionsClient, CodeStarConnectionsClientBuilder, CodeStarConnectionsClientImpl,
    METADATA,
};
pub use error::{CodeStarConnectionsError, Result};
pub use services::{ConnectionsService, HostsService, TagsService};
pub use types::*;
