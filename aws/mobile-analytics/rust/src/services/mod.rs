//! Service implementations for Mobile Analytics operations.

mod events;

pub use events::{EventsService, MAX_EVENTS_PER_BATCH};
