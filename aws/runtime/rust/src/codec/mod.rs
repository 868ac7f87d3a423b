//! Serde adapters for AWS JSON member encodings.
//!
//! Use with `#[serde(with = "...")]` on model fields:
//!
//! ```ignore
//! #[serde(rename = "CreationDateTime", with = "aws_runtime::codec::epoch_seconds::option")]
//! pub creation_date_time: Option<DateTime<Utc>>,
//! ```

pub mod base64_blob;
pub mod epoch_seconds;
