//! Event recording client with global attributes, sessions and batching.

use super::event::{truncate, AnalyticsEvent, MAX_KEY_LENGTH};
use crate::context::{ClientContext, BASE64_ENCODING};
use crate::error::MobileAnalyticsError;
use crate::services::{EventsService, MAX_EVENTS_PER_BATCH};
use crate::types::{format_timestamp, Event, PutEventsRequest, Session};
use aws_runtime::ServiceClient;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Event type recorded when a session starts.
pub const SESSION_START_EVENT: &str = "_session.start";

/// Event type recorded when a session stops.
pub const SESSION_STOP_EVENT: &str = "_session.stop";

#[derive(Debug, Clone)]
struct ActiveSession {
    id: String,
    started: DateTime<Utc>,
}

impl ActiveSession {
    fn wire(&self) -> Session {
        Session {
            id: Some(self.id.clone()),
            start_timestamp: Some(format_timestamp(&self.started)),
            ..Default::default()
        }
    }
}

/// Per-type globals are keyed by the event type as events store it.
fn type_key(event_type: impl Into<String>) -> String {
    truncate(event_type.into(), MAX_KEY_LENGTH)
}

/// Clears the submit flag however `submit_events` exits.
struct SubmitGuard<'a>(&'a AtomicBool);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Records events locally and submits them in batches.
///
/// Global attributes and metrics are copied onto each event created through
/// [`create_event`](Self::create_event); per-type values override global
/// ones. Locks are never held across an `.await`.
pub struct EventClient {
    events: EventsService,
    context_header: String,
    app_id: String,
    record_session_events: bool,

    global_attributes: RwLock<HashMap<String, String>>,
    global_metrics: RwLock<HashMap<String, f64>>,
    type_attributes: RwLock<HashMap<String, HashMap<String, String>>>,
    type_metrics: RwLock<HashMap<String, HashMap<String, f64>>>,
    session: RwLock<Option<ActiveSession>>,
    queue: Mutex<Vec<Event>>,

    recorded: AtomicU64,
    submitting: AtomicBool,
}

impl EventClient {
    /// Create a client that submits under `context`.
    pub fn new(
        client: Arc<ServiceClient>,
        context: ClientContext,
    ) -> Result<Self, MobileAnalyticsError> {
        let context_header = context.to_header_value()?;
        Ok(Self {
            events: EventsService::new(client),
            context_header,
            app_id: context.app_id().to_string(),
            record_session_events: true,
            global_attributes: RwLock::new(HashMap::new()),
            global_metrics: RwLock::new(HashMap::new()),
            type_attributes: RwLock::new(HashMap::new()),
            type_metrics: RwLock::new(HashMap::new()),
            session: RwLock::new(None),
            queue: Mutex::new(Vec::new()),
            recorded: AtomicU64::new(0),
            submitting: AtomicBool::new(false),
        })
    }

    /// Whether `start_session` and `stop_session` record
    /// `_session.start` / `_session.stop` events (default: true).
    pub fn with_session_events(mut self, enabled: bool) -> Self {
        self.record_session_events = enabled;
        self
    }

    /// App ID from the client context.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Add an attribute to every event.
    pub fn add_global_attribute(&self, key: impl Into<String>, value: impl Into<String>) {
        self.global_attributes.write().insert(key.into(), value.into());
    }

    /// Add a metric to every event.
    pub fn add_global_metric(&self, key: impl Into<String>, value: f64) {
        self.global_metrics.write().insert(key.into(), value);
    }

    /// Add an attribute to events of one type.
    pub fn add_global_attribute_for_type(
        &self,
        event_type: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.type_attributes
            .write()
            .entry(type_key(event_type))
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Add a metric to events of one type.
    pub fn add_global_metric_for_type(
        &self,
        event_type: impl Into<String>,
        key: impl Into<String>,
        value: f64,
    ) {
        self.type_metrics
            .write()
            .entry(type_key(event_type))
            .or_default()
            .insert(key.into(), value);
    }

    /// Remove a global attribute.
    pub fn remove_global_attribute(&self, key: &str) {
        self.global_attributes.write().remove(key);
    }

    /// Remove a global metric.
    pub fn remove_global_metric(&self, key: &str) {
        self.global_metrics.write().remove(key);
    }

    /// Remove a per-type attribute.
    pub fn remove_global_attribute_for_type(&self, event_type: &str, key: &str) {
        if let Some(attributes) = self.type_attributes.write().get_mut(&type_key(event_type)) {
            attributes.remove(key);
        }
    }

    /// Remove a per-type metric.
    pub fn remove_global_metric_for_type(&self, event_type: &str, key: &str) {
        if let Some(metrics) = self.type_metrics.write().get_mut(&type_key(event_type)) {
            metrics.remove(key);
        }
    }

    /// Create an event carrying the global values and the current session.
    pub fn create_event(&self, event_type: impl Into<String>) -> AnalyticsEvent {
        let mut event = AnalyticsEvent::new(event_type);
        let event_type = event.event_type().to_string();

        for (key, value) in self.global_attributes.read().iter() {
            event.add_attribute(key.clone(), value.clone());
        }
        for (key, value) in self.global_metrics.read().iter() {
            event.add_metric(key.clone(), *value);
        }
        if let Some(attributes) = self.type_attributes.read().get(&event_type) {
            for (key, value) in attributes {
                event.add_attribute(key.clone(), value.clone());
            }
        }
        if let Some(metrics) = self.type_metrics.read().get(&event_type) {
            for (key, value) in metrics {
                event.add_metric(key.clone(), *value);
            }
        }

        match self.session.read().as_ref() {
            Some(session) => event.with_session(session.wire()),
            None => event,
        }
    }

    /// Queue an event for the next submission.
    pub fn record_event(&self, event: AnalyticsEvent) {
        let event = Event::from(event);
        debug!(event_type = %event.event_type, "Recording event");
        self.queue.lock().push(event);
        self.recorded.fetch_add(1, Ordering::Relaxed);
    }

    /// Start a new session, stopping the current one first. Returns the new
    /// session ID.
    pub fn start_session(&self) -> String {
        if self.session.read().is_some() {
            self.stop_session();
        }

        let session = ActiveSession {
            id: uuid::Uuid::new_v4().to_string(),
            started: Utc::now(),
        };
        let id = session.id.clone();
        *self.session.write() = Some(session);
        info!(session_id = %id, "Session started");

        if self.record_session_events {
            let event = self.create_event(SESSION_START_EVENT);
            self.record_event(event);
        }
        id
    }

    /// Stop the current session. Returns the finished session, if one was
    /// active.
    pub fn stop_session(&self) -> Option<Session> {
        let active = self.session.write().take()?;
        let stopped = Utc::now();
        let session = Session {
            id: Some(active.id.clone()),
            duration: Some((stopped - active.started).num_milliseconds()),
            start_timestamp: Some(format_timestamp(&active.started)),
            stop_timestamp: Some(format_timestamp(&stopped)),
        };
        info!(session_id = %active.id, duration_ms = session.duration, "Session stopped");

        if self.record_session_events {
            let event = self
                .create_event(SESSION_STOP_EVENT)
                .with_session(session.clone());
            self.record_event(event);
        }
        Some(session)
    }

    /// ID of the active session.
    pub fn current_session_id(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.id.clone())
    }

    /// Events recorded since the client was created.
    pub fn recorded_event_count(&self) -> u64 {
        self.recorded.load(Ordering::Relaxed)
    }

    /// Events waiting for submission.
    pub fn pending_event_count(&self) -> usize {
        self.queue.lock().len()
    }

    /// Send queued events in batches of at most 100.
    ///
    /// Each batch leaves the queue only after the service accepted it, so a
    /// failure keeps that batch and everything after it for the next call.
    /// Returns the number of events sent; a call made while another submit
    /// is running returns 0 without sending.
    pub async fn submit_events(&self) -> Result<usize, MobileAnalyticsError> {
        if self.submitting.swap(true, Ordering::AcqRel) {
            debug!("Submit already in progress");
            return Ok(0);
        }
        let _guard = SubmitGuard(&self.submitting);

        let mut submitted = 0;
        loop {
            let batch: Vec<Event> = {
                let queue = self.queue.lock();
                queue.iter().take(MAX_EVENTS_PER_BATCH).cloned().collect()
            };
            if batch.is_empty() {
                break;
            }

            let count = batch.len();
            let request = PutEventsRequest::new(batch, self.context_header.clone())
                .with_client_context_encoding(BASE64_ENCODING);

            if let Err(e) = self.events.put_events(request).await {
                warn!(
                    error = %e,
                    pending = self.pending_event_count(),
                    "Event submission failed"
                );
                return Err(e);
            }

            // Only this task removes from the queue; new events are appended.
            self.queue.lock().drain(..count);
            submitted += count;
        }

        if submitted > 0 {
            info!(submitted, "Submitted events");
        }
        Ok(submitted)
    }
}

impl std::fmt::Debug for EventClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventClient")
            .field("app_id", &self.app_id)
            .field("recorded", &self.recorded_event_count())
            .field("pending", &self.pending_event_count())
            .finish_non_exhaustive()
    }
}
