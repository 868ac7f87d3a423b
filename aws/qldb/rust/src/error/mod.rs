//! Error types for the QLDB integration.
//!
//! QLDB errors carry extra members describing the offending parameter or
//! resource; they are kept on the underlying [`ServiceError`] and exposed
//! through [`QldbError::parameter_name`], [`QldbError::resource_type`] and
//! [`QldbError::resource_name`].

mod mapping;

pub use mapping::map_qldb_error;

use aws_runtime::{AwsError, ServiceError};
use thiserror::Error;

/// Errors returned by QLDB operations.
#[derive(Debug, Error)]
pub enum QldbError {
    /// One or more parameters are not valid.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(ServiceError),

    /// A resource quota for the account would be exceeded.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(ServiceError),

    /// The resource already exists.
    #[error("Resource already exists: {0}")]
    ResourceAlreadyExists(ServiceError),

    /// The resource is being used by another request.
    #[error("Resource in use: {0}")]
    ResourceInUse(ServiceError),

    /// The resource does not exist.
    #[error("Resource not found: {0}")]
    ResourceNotFound(ServiceError),

    /// The operation failed because a precondition wasn't satisfied.
    #[error("Resource precondition not met: {0}")]
    ResourcePreconditionNotMet(ServiceError),

    /// An error code this crate does not model.
    #[error("Service error: {0}")]
    Service(ServiceError),

    /// A failure that happened before or outside the service.
    #[error(transparent)]
    Client(AwsError),
}

impl QldbError {
    /// Underlying service error, if the service answered.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::InvalidParameter(e)
            | Self::LimitExceeded(e)
            | Self::ResourceAlreadyExists(e)
            | Self::ResourceInUse(e)
            | Self::ResourceNotFound(e)
            | Self::ResourcePreconditionNotMet(e)
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

    /// Name of the invalid parameter (`InvalidParameterException`).
    pub fn parameter_name(&self) -> Option<&str> {
        self.service_error()?.member_str("ParameterName")
    }

    /// Type of the resource involved, e.g. `LEDGER`.
    pub fn resource_type(&self) -> Option<&str> {
        self.service_error()?.member_str("ResourceType")
    }

    /// Name of the resource involved.
    pub fn resource_name(&self) -> Option<&str> {
        self.service_error()?.member_str("ResourceName")
    }
}

impl From<AwsError> for QldbError {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::Service(service) => map_qldb_error(service),
            other => Self::Client(other),
        }
    }
}

/// Result type for QLDB operations.
pub type Result<T> = std::result::Result<T, QldbError>;
