//! Resilience patterns for AWS calls.

mod retry;

pub use retry::{RetryConfig, RetryPolicy};
