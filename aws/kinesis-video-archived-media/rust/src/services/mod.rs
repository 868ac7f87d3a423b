//! Service implementations for Kinesis Video Archived Media operations.

mod fragments;
mod streaming;

pub use fragments::FragmentsService;
pub use streaming::StreamingService;
