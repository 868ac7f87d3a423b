//! AWS Marketplace Catalog integration.
//!
//! Read catalog entities (products, offers) and change them through change
//! sets: batches of changes that are validated and applied asynchronously.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_marketplace_catalog::{
//!     Change, Entity, MarketplaceCatalogClient, MarketplaceCatalogClientImpl,
//!     StartChangeSetRequest, AWS_MARKETPLACE_CATALOG,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aws_marketplace_catalog::MarketplaceCatalogError> {
//!     let client = MarketplaceCatalogClientImpl::builder().from_env().build()?;
//!
//!     let change = Change::new(
//!         "UpdateInformation",
//!         Entity::existing("ServerProduct@1.0", "prod-abc123"),
//!         &serde_json::json!({ "ProductTitle": "Widget Pro" }),
//!     )?;
//!     let started = client
//!         .change_sets()
//!         .start_change_set(StartChangeSetRequest::new(vec![change]))
//!         .await?;
//!
//!     let id = started.change_set_id.unwrap_or_default();
//!     let status = client
//!         .change_sets()
//!         .describe_change_set(AWS_MARKETPLACE_CATALOG, &id)
//!         .await?;
//!     println!("{:?}", status.status);
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
    MarketplaceCatalogClient, MarketplaceCatalogClientBuilder, MarketplaceCatalogClientImpl,
    METADATA,
};
pub use error::{MarketplaceCatalogError, Result};
pub use services::{ChangeSetsService, EntitiesService};
pub use types::*;
