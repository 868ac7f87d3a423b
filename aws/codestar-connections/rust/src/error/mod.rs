//! Error types for the CodeStar Connections integration.

mod mapping;

pub use mapping::map_codestar_connections_error;

use aws_runtime::{AwsError, ServiceError};
use thiserror::Error;

/// Errors returned by CodeStar Connections operations.
#[derive(Debug, Error)]
pub enum CodeStarConnectionsError {
    /// Two conflicting operations were made on the same resource.
    #[error("Conflict: {0}")]
    Conflict(ServiceError),

    /// The account has too many connections or hosts.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(ServiceError),

    /// The connection or host does not exist.
    #[error("Resource not found: {0}")]
    ResourceNotFound(ServiceError),

    /// The resource is not in a state that allows the operation.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(ServiceError),

    /// The operation is not supported for this provider.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(ServiceError),

    /// An error code this crate does not model.
    #[error("Service error: {0}")]
    Service(ServiceError),

    /// A failure that happened before or outside the service.
    #[error(transparent)]
    Client(AwsError),
}

impl CodeStarConnectionsError {
    /// Underlying service error, if the service answered.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Conflict(e)
            | Self::LimitExceeded(e)
            | Self::ResourceNotFound(e)
            | Self::ResourceUnavailable(e)
            | Self::UnsupportedOperation(e)
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
            Self::Client(e) => e.is_retryable(),
            _ => self.service_error().map_or(false, ServiceError::is_retryable),
        }
    }
}

impl From<AwsError> for CodeStarConnectionsError {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::Service(service) => map_codestar_connections_error(service),
            other => Self::Client(other),
        }
    }
}

/// Result type for CodeStar Connections operations.
pub type Result<T> = std::result::Result<T, CodeStarConnectionsError>;
