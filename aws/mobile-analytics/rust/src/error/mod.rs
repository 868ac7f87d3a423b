//! Error types for the Mobile Analytics integration.

mod mapping;

pub use mapping::map_mobile_analytics_error;

use aws_runtime::{AwsError, ServiceError};
use thiserror::Error;

/// Errors returned by Mobile Analytics operations.
#[derive(Debug, Error)]
pub enum MobileAnalyticsError {
    /// The events or client context were rejected.
    #[error("Bad request: {0}")]
    BadRequest(ServiceError),

    /// An error code this crate does not model.
    #[error("Service error: {0}")]
    Service(ServiceError),

    /// A failure that happened before or outside the service.
    #[error(transparent)]
    Client(AwsError),
}

impl MobileAnalyticsError {
    /// Underlying service error, if the service answered.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::BadRequest(e) | Self::Service(e) => Some(e),
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
            Self::BadRequest(_) => false,
            Self::Client(e) => e.is_retryable(),
            Self::Service(e) => e.is_retryable(),
        }
    }
}

impl From<AwsError> for MobileAnalyticsError {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::Service(service) => map_mobile_analytics_error(service),
            other => Self::Client(other),
        }
    }
}

/// Result type for Mobile Analytics operations.
pub type Result<T> = std::result::Result<T, MobileAnalyticsError>;
