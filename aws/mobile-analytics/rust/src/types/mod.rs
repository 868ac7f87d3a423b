//! Wire types for Amazon Mobile Analytics.

mod events;

pub use events::*;
