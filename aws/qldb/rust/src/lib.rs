//! Amazon QLDB Integration Module
//!
//! Typed access to the QLDB control plane: ledger lifecycle, journal exports
//! to S3, journal streams to Kinesis, blocks/digests/revisions for
//! verification, and tagging.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_qldb::{CreateLedgerRequest, PermissionsMode, QldbClient, QldbClientImpl};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aws_qldb::QldbError> {
//!     let client = QldbClientImpl::builder().from_env().build()?;
//!
//!     let ledger = client
//!         .ledgers()
//!         .create_ledger(CreateLedgerRequest::new("books", PermissionsMode::Standard))
//!         .await?;
//!
//!     println!("{:?} is {:?}", ledger.name, ledger.state);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod services;
pub mod types;

pub use client::{QldbClient, QldbClientBuilder, QldbClientImpl, METADATA};
pub use error::{QldbError, Result};
pub use services::{ExportsService, JournalService, LedgersService, StreamsService, TagsService};
pub use types::*;
