//! `PutEvents` wire shapes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Format a time the way the service expects: ISO-8601, millisecond
/// precision, UTC.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Session an event belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Duration in milliseconds, set once the session stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Session start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<String>,
    /// Session stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_timestamp: Option<String>,
}

/// One event as sent to the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event type, such as `_session.start` or `level.complete`.
    pub event_type: String,
    /// When the event happened.
    pub timestamp: String,
    /// Session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    /// Event schema version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// String attributes.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    /// Numeric metrics.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metrics: HashMap<String, f64>,
}

impl Event {
    /// An event with no session, attributes or metrics.
    pub fn new(event_type: impl Into<String>, timestamp: &DateTime<Utc>) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp: format_timestamp(timestamp),
            session: None,
            version: None,
            attributes: HashMap::new(),
            metrics: HashMap::new(),
        }
    }
}

/// Input for `PutEvents`.
#[derive(Debug, Clone, Serialize)]
pub struct PutEventsRequest {
    /// Events to record.
    pub events: Vec<Event>,
    /// Client context header value.
    #[serde(skip)]
    pub client_context: String,
    /// Encoding of `client_context`, such as `base64`.
    #[serde(skip)]
    pub client_context_encoding: Option<String>,
}

impl PutEventsRequest {
    /// Events with a plain JSON client context.
    pub fn new(events: Vec<Event>, client_context: impl Into<String>) -> Self {
        Self {
            events,
            client_context: client_context.into(),
            client_context_encoding: None,
        }
    }

    /// Mark the client context as encoded.
    pub fn with_client_context_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.client_context_encoding = Some(encoding.into());
        self
    }
}
