//! Amazon Macie integration.
//!
//! Sensitive data discovery for S3: account enablement, findings and
//! findings filters, classification jobs, custom data identifiers,
//! administrator/member accounts and usage statistics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_macie::{
//!     CreateClassificationJobRequest, MacieClient, MacieClientImpl, S3BucketDefinitionForJob,
//!     S3JobDefinition,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aws_macie::MacieError> {
//!     let client = MacieClientImpl::builder().from_env().build()?;
//!
//!     let definition = S3JobDefinition {
//!         bucket_definitions: vec![S3BucketDefinitionForJob::new(
//!             "123456789012",
//!             vec!["customer-uploads".to_string()],
//!         )],
//!         scoping: None,
//!     };
//!
//!     let job = client
//!         .classification_jobs()
//!         .create_classification_job(CreateClassificationJobRequest::one_time(
//!             "scan-uploads",
//!             definition,
//!         ))
//!         .await?;
//!
//!     println!("{:?}", job.job_id);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod services;
pub mod types;

pub use client::{MacieClient, MacieClientBuilder, MacieClientImpl, METADATA};
pub use error::{MacieError, Result};
pub use services::{
    AccountsService, BucketsService, ClassificationJobsService, CustomDataIdentifiersService,
    FindingsFiltersService, FindingsService, OrganizationService, SessionService, TagsService,
    UsageService,
};
pub use types::*;
