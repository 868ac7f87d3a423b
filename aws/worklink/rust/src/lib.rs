//! Amazon WorkLink integration.
//!
//! Manage WorkLink fleets and the internal websites, devices, certificate
//! authorities and identity providers attached to them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_worklink::{CreateFleetRequest, WorkLinkClient, WorkLinkClientImpl};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aws_worklink::WorkLinkError> {
//!     let client = WorkLinkClientImpl::builder().from_env().build()?;
//!
//!     let fleet = client
//!         .fleets()
//!         .create_fleet(CreateFleetRequest::new("field-staff").with_display_name("Field Staff"))
//!         .await?;
//!
//!     println!("{:?}", fleet.fleet_arn);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod services;
pub mod types;

pub use client::{WorkLinkClient, WorkLinkClientBuilder, WorkLinkClientImpl, METADATA};
pub use error::{Result, WorkLinkError};
pub use services::{
    AuthorizationProvidersService, CertificateAuthoritiesService, ConfigurationService,
    DevicesService, DomainsService, FleetsService, TagsService,
};
pub use types::*;
