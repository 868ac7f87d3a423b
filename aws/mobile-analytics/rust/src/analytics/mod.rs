//! Client-side event recording on top of `PutEvents`.
//!
//! [`AnalyticsEvent`] enforces the service's per-event limits before an
//! event leaves the process. [`EventClient`] adds global attributes,
//! session tracking and batched submission.

mod event;
mod event_client;

pub use event::{
    AnalyticsEvent, MAX_ATTRIBUTE_VALUE_LENGTH, MAX_ATTRIBUTES_AND_METRICS, MAX_KEY_LENGTH,
};
pub use event_client::{EventClient, SESSION_START_EVENT, SESSION_STOP_EVENT};
