//! Amazon Mobile Analytics integration.
//!
//! Send app usage events with `PutEvents`. Besides the raw operation the
//! crate builds the client context header, enforces per-event limits and
//! offers an [`EventClient`] that tracks sessions and submits queued events
//! in batches.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_mobile_analytics::{ClientContext, MobileAnalyticsClient, MobileAnalyticsClientImpl};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aws_mobile_analytics::MobileAnalyticsError> {
//!     let client = MobileAnalyticsClientImpl::builder().from_env().build()?;
//!
//!     let context = ClientContext::builder()
//!         .client_id("7b9e6c1e-install")
//!         .app_id("a1b2c3d4e5f6")
//!         .app_title("Puzzle")
//!         .build()?;
//!     let events = client.event_client(context)?;
//!
//!     events.start_session();
//!     let level = events
//!         .create_event("level.complete")
//!         .with_attribute("level", "3")
//!         .with_metric("seconds", 41.0);
//!     events.record_event(level);
//!     events.stop_session();
//!
//!     let sent = events.submit_events().await?;
//!     println!("sent {} events", sent);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod analytics;
pub mod client;
pub mod context;
pub mod error;
pub mod services;
pub mod types;

pub use analytics::{AnalyticsEvent, EventClient};
pub use client::{
    MobileAnalyticsClient, MobileAnalyticsClientBuilder, MobileAnalyticsClientImpl, METADATA,
};
pub use context::{ClientContext, ClientContextBuilder};
pub use error::{MobileAnalyticsError, Result};
pub use services::EventsService;
pub use types::*;
