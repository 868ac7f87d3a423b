//! Error types for the Kinesis Video Archived Media integration.

mod mapping;

pub use mapping::map_kinesis_video_archived_media_error;

use aws_runtime::{AwsError, ServiceError};
use thiserror::Error;

/// Errors returned by Kinesis Video Archived Media operations.
#[derive(Debug, Error)]
pub enum KinesisVideoArchivedMediaError {
    /// Too many concurrent API calls for the account.
    #[error("Client limit exceeded: {0}")]
    ClientLimitExceeded(ServiceError),

    /// A parameter exceeds its limits, is not supported, or can't be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(ServiceError),

    /// The codec private data in at least one track is not valid.
    #[error("Invalid codec private data: {0}")]
    InvalidCodecPrivateData(ServiceError),

    /// One or more frames in the requested clip could not be parsed.
    #[error("Invalid media frame: {0}")]
    InvalidMediaFrame(ServiceError),

    /// No codec private data was found in at least one track.
    #[error("Missing codec private data: {0}")]
    MissingCodecPrivateData(ServiceError),

    /// The stream has no data retention configured.
    #[error("No data retention: {0}")]
    NoDataRetention(ServiceError),

    /// The caller is not authorized to perform the operation.
    #[error("Not authorized: {0}")]
    NotAuthorized(ServiceError),

    /// The stream or session could not be found.
    #[error("Resource not found: {0}")]
    ResourceNotFound(ServiceError),

    /// The stream's codec is not supported for the requested playback.
    #[error("Unsupported stream media type: {0}")]
    UnsupportedStreamMediaType(ServiceError),

    /// An error code this crate does not model.
    #[error("Service error: {0}")]
    Service(ServiceError),

    /// A failure that happened before or outside the service.
    #[error(transparent)]
    Client(AwsError),
}

impl KinesisVideoArchivedMediaError {
    /// Underlying service error, if the service answered.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::ClientLimitExceeded(e)
            | Self::InvalidArgument(e)
            | Self::InvalidCodecPrivateData(e)
            | Self::InvalidMediaFrame(e)
            | Self::MissingCodecPrivateData(e)
            | Self::NoDataRetention(e)
            | Self::NotAuthorized(e)
            | Self::ResourceNotFound(e)
            | Self::UnsupportedStreamMediaType(e)
            | Self::Service(e) => Some(e),
            Self::Client(_) => None,
        }
    }

    /// AWS error code.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Client(e) => e.error_code(),
            _ => self.service_error().map(|e| e.code.as_str()),
        }
    }

    /// AWS request ID.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Client(e) => e.request_id(),
            _ => self.service_error().and_then(|e| e.request_id.as_deref()),
        }
    }

    /// HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            _ => self.service_error().map(|e| e.status),
        }
    }

    /// Check if the request could succeed when retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ClientLimitExceeded(_) => true,
            Self::Client(e) => e.is_retryable(),
            _ => self.service_error().map_or(false, ServiceError::is_retryable),
        }
    }
}

impl From<AwsError> for KinesisVideoArchivedMediaError {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::Service(service) => map_kinesis_video_archived_media_error(service),
            other => Self::Client(other),
        }
    }
}

/// Result type for Kinesis Video Archived Media operations.
pub type Result<T> = std::result::Result<T, KinesisVideoArchivedMediaError>;
