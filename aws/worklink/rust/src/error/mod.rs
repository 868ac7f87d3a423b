//! Error types for the WorkLink integration.

mod mapping;

pub use mapping::map_worklink_error;

use aws_runtime::{AwsError, ServiceError};
use thiserror::Error;

/// Errors returned by WorkLink operations.
#[derive(Debug, Error)]
pub enum WorkLinkError {
    /// The service is temporarily unavailable.
    #[error("Internal server error: {0}")]
    InternalServerError(ServiceError),

    /// The request is not valid.
    #[error("Invalid request: {0}")]
    InvalidRequest(ServiceError),

    /// The resource already exists.
    #[error("Resource already exists: {0}")]
    ResourceAlreadyExists(ServiceError),

    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    ResourceNotFound(ServiceError),

    /// The number of requests exceeds the limit.
    #[error("Too many requests: {0}")]
    TooManyRequests(ServiceError),

    /// You are not authorized to perform this action.
    #[error("Unauthorized: {0}")]
    Unauthorized(ServiceError),

    /// An error code this crate does not model.
    #[error("Service error: {0}")]
    Service(ServiceError),

    /// A failure that happened before or outside the service.
    #[error(transparent)]
    Client(AwsError),
}

impl WorkLinkError {
    /// Underlying service error, if the service answered.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::InternalServerError(e)
            | Self::InvalidRequest(e)
            | Self::ResourceAlreadyExists(e)
            | Self::ResourceNotFound(e)
            | Self::TooManyRequests(e)
            | Self::Unauthorized(e)
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
            Self::InternalServerError(_) | Self::TooManyRequests(_) => true,
            Self::Client(e) => e.is_retryable(),
            _ => self.service_error().map_or(false, ServiceError::is_retryable),
        }
    }
}

impl From<AwsError> for WorkLinkError {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::Service(service) => map_worklink_error(service),
            other => Self::Client(other),
        }
    }
}

/// Result type for WorkLink operations.
pub type Result<T> = std::result::Result<T, WorkLinkError>;
