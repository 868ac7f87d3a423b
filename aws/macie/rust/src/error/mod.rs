//! Error types for the Macie integration.

mod mapping;

pub use mapping::map_macie_error;

use aws_runtime::{AwsError, ServiceError};
use thiserror::Error;

/// Errors returned by Macie operations.
#[derive(Debug, Error)]
pub enum MacieError {
    /// Insufficient permissions.
    #[error("Access denied: {0}")]
    AccessDenied(ServiceError),

    /// The request conflicts with the current state of a resource.
    #[error("Conflict: {0}")]
    Conflict(ServiceError),

    /// The service failed to process the request.
    #[error("Internal server error: {0}")]
    InternalServer(ServiceError),

    /// A resource does not exist.
    #[error("Resource not found: {0}")]
    ResourceNotFound(ServiceError),

    /// A service quota would be exceeded.
    #[error("Service quota exceeded: {0}")]
    ServiceQuotaExceeded(ServiceError),

    /// The request was throttled.
    #[error("Throttled: {0}")]
    Throttling(ServiceError),

    /// The request failed service-side validation.
    #[error("Validation failed: {0}")]
    Validation(ServiceError),

    /// An error code this crate does not model.
    #[error("Service error: {0}")]
    Service(ServiceError),

    /// A failure that happened before or outside the service.
    #[error(transparent)]
    Client(AwsError),
}

impl MacieError {
    /// Underlying service error, if the service answered.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::AccessDenied(e)
            | Self::Conflict(e)
            | Self::InternalServer(e)
            | Self::ResourceNotFound(e)
            | Self::ServiceQuotaExceeded(e)
            | Self::Throttling(e)
            | Self::Validation(e)
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
            Self::InternalServer(_) | Self::Throttling(_) => true,
            Self::Client(e) => e.is_retryable(),
            _ => self.service_error().map_or(false, ServiceError::is_retryable),
        }
    }
}

impl From<AwsError> for MacieError {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::Service(service) => map_macie_error(service),
            other => Self::Client(other),
        }
    }
}

/// Result type for Macie operations.
pub type Result<T> = std::result::Result<T, MacieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttling_is_retryable() {
        let err: MacieError =
            AwsError::Service(ServiceError::new("ThrottlingException", "slow down", 429)).into();
        assert!(matches!(err, MacieError::Throttling(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_conflict_is_not_retryable() {
        let err: MacieError =
            AwsError::Service(ServiceError::new("ConflictException", "job is running", 409))
                .into();
        assert!(!err.is_retryable());
        assert_eq!(err.status_code(), Some(409));
    }
}
