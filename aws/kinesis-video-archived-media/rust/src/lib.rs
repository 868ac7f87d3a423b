//! Amazon Kinesis Video Streams Archived Media integration.
//!
//! Retrieve archived video from Kinesis Video Streams: HLS and DASH playback
//! session URLs, MP4 clips, fragment listings and raw fragment media.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_kinesis_video_archived_media::{
//!     GetHlsStreamingSessionUrlRequest, KinesisVideoArchivedMediaClient,
//!     KinesisVideoArchivedMediaClientImpl, PlaybackMode,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aws_kinesis_video_archived_media::KinesisVideoArchivedMediaError> {
//!     let client = KinesisVideoArchivedMediaClientImpl::builder().from_env().build()?;
//!
//!     let session = client
//!         .streaming()
//!         .get_hls_streaming_session_url(
//!             GetHlsStreamingSessionUrlRequest::for_stream_name("front-door")
//!                 .with_playback_mode(PlaybackMode::Live),
//!         )
//!         .await?;
//!
//!     println!("{:?}", session.hls_streaming_session_url);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod services;
pub mod types;

pub use client::{
    KinesisVideoArchivedMediaClient, KinesisVideoArchivedMediaClientBuilder,
    KinesisVideoArchivedMediaClientImpl, METADATA,
};
pub use error::{KinesisVideoArchivedMediaError, Result};
pub use services::{FragmentsService, StreamingService};
pub use types::*;
