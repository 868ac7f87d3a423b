//! A single analytics event with the service limits applied.

use crate::types::{format_timestamp, Event, Session};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::warn;

/// Attributes and metrics allowed on one event, combined.
pub const MAX_ATTRIBUTES_AND_METRICS: usize = 40;

/// Longest event type or attribute/metric key, in characters.
pub const MAX_KEY_LENGTH: usize = 50;

/// Longest attribute value, in characters.
pub const MAX_ATTRIBUTE_VALUE_LENGTH: usize = 1000;

pub(crate) fn truncate(value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((end, _)) => value[..end].to_string(),
        None => value,
    }
}

/// An event being built for submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    event_type: String,
    timestamp: DateTime<Utc>,
    session: Option<Session>,
    version: Option<String>,
    attributes: HashMap<String, String>,
    metrics: HashMap<String, f64>,
}

impl AnalyticsEvent {
    /// Create an event stamped now.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self::at(event_type, Utc::now())
    }

    /// Create an event with an explicit timestamp.
    pub fn at(event_type: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_type: truncate(event_type.into(), MAX_KEY_LENGTH),
            timestamp,
            session: None,
            version: None,
            attributes: HashMap::new(),
            metrics: HashMap::new(),
        }
    }

    /// Event type, truncated to [`MAX_KEY_LENGTH`].
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// When the event happened.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Attributes.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Metrics.
    pub fn metrics(&self) -> &HashMap<String, f64> {
        &self.metrics
    }

    /// Attached session.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn is_full(&self) -> bool {
        self.attributes.len() + self.metrics.len() >= MAX_ATTRIBUTES_AND_METRICS
    }

    /// Add or replace an attribute. Returns `false` when the event is full
    /// and the attribute was dropped.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = truncate(key.into(), MAX_KEY_LENGTH);
        // A key already used as a metric still takes a new slot.
        if !self.attributes.contains_key(&key) && self.is_full() {
            warn!(
                event_type = %self.event_type,
                key = %key,
                "Attribute dropped, event already has {} attributes and metrics",
                MAX_ATTRIBUTES_AND_METRICS
            );
            return false;
        }
        self.attributes
            .insert(key, truncate(value.into(), MAX_ATTRIBUTE_VALUE_LENGTH));
        true
    }

    /// Add or replace a metric. Returns `false` when the event is full and
    /// the metric was dropped.
    pub fn add_metric(&mut self, key: impl Into<String>, value: f64) -> bool {
        let key = truncate(key.into(), MAX_KEY_LENGTH);
        if !self.metrics.contains_key(&key) && self.is_full() {
            warn!(
                event_type = %self.event_type,
                key = %key,
                "Metric dropped, event already has {} attributes and metrics",
                MAX_ATTRIBUTES_AND_METRICS
            );
            return false;
        }
        self.metrics.insert(key, value);
        true
    }

    /// Builder form of [`add_attribute`](Self::add_attribute).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Builder form of [`add_metric`](Self::add_metric).
    pub fn with_metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.add_metric(key, value);
        self
    }

    /// Attach a session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the event schema version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }

    /// Remove a metric.
    pub fn remove_metric(&mut self, key: &str) -> Option<f64> {
        self.metrics.remove(key)
    }

    /// Wire form.
    pub fn to_event(&self) -> Event {
        Event {
            event_type: self.event_type.clone(),
            timestamp: format_timestamp(&self.timestamp),
            session: self.session.clone(),
            version: self.version.clone(),
            attributes: self.attributes.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl From<AnalyticsEvent> for Event {
    fn from(event: AnalyticsEvent) -> Self {
        Event {
            event_type: event.event_type,
            timestamp: format_timestamp(&event.timestamp),
            session: event.session,
            version: event.version,
            attributes: event.attributes,
            metrics: event.metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_type_truncated() {
        let event = AnalyticsEvent::new("x".repeat(80));
        assert_eq!(event.event_type().chars().count(), MAX_KEY_LENGTH);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let event = AnalyticsEvent::new("é".repeat(60));
        assert_eq!(event.event_type(), "é".repeat(50));
    }

    #[test]
    fn test_key_and_value_truncated() {
        let mut event = AnalyticsEvent::new("level");
        assert!(event.add_attribute("k".repeat(70), "v".repeat(1500)));

        let (key, value) = event.attributes().iter().next().unwrap();
        assert_eq!(key.len(), MAX_KEY_LENGTH);
        assert_eq!(value.len(), MAX_ATTRIBUTE_VALUE_LENGTH);
    }

    #[test]
    fn test_combined_cap() {
        let mut event = AnalyticsEvent::new("level");
        for i in 0..30 {
            assert!(event.add_attribute(format!("a{}", i), "v"));
        }
        for i in 0..10 {
            assert!(event.add_metric(format!("m{}", i), i as f64));
        }

        assert!(!event.add_attribute("extra", "v"));
        assert!(!event.add_metric("extra", 1.0));
        assert_eq!(event.attributes().len() + event.metrics().len(), 40);

        // Replacing an existing key is always allowed
        assert!(event.add_attribute("a0", "replaced"));
        assert_eq!(event.attributes()["a0"], "replaced");
        assert!(event.add_metric("m0", 9.5));
    }

    #[test]
    fn test_metric_on_attribute_key_counts_against_cap() {
        let mut event = AnalyticsEvent::new("level");
        for i in 0..MAX_ATTRIBUTES_AND_METRICS {
            assert!(event.add_attribute(format!("k{}", i), "v"));
        }

        assert!(!event.add_metric("k0", 1.0));
        assert!(event.metrics().is_empty());
        assert_eq!(event.attributes().len() + event.metrics().len(), 40);
    }

    #[test]
    fn test_attribute_on_metric_key_counts_against_cap() {
        let mut event = AnalyticsEvent::new("level");
        for i in 0..MAX_ATTRIBUTES_AND_METRICS {
            assert!(event.add_metric(format!("k{}", i), i as f64));
        }

        assert!(!event.add_attribute("k0", "v"));
        assert!(event.attributes().is_empty());
        assert_eq!(event.attributes().len() + event.metrics().len(), 40);
    }

    #[test]
    fn test_to_event() {
        let event = AnalyticsEvent::at("purchase", Utc.timestamp_opt(0, 0).unwrap())
            .with_attribute("item", "sword")
            .with_metric("price", 2.5)
            .with_version("v2.0");

        let wire = event.to_event();
        assert_eq!(wire.timestamp, "1970-01-01T00:00:00.000Z");
        assert_eq!(wire.attributes["item"], "sword");
        assert_eq!(wire.metrics["price"], 2.5);
        assert_eq!(wire.version.as_deref(), Some("v2.0"));
        assert_eq!(Event::from(event), wire);
    }
}
