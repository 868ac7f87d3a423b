//! Error types for the Marketplace Catalog integration.

mod mapping;

pub use mapping::map_marketplace_catalog_error;

use aws_runtime::{AwsError, ServiceError};
use thiserror::Error;

/// Errors returned by Marketplace Catalog operations.
#[derive(Debug, Error)]
pub enum MarketplaceCatalogError {
    /// Access is denied.
    #[error("Access denied: {0}")]
    AccessDenied(ServiceError),

    /// Unexpected failure in the service.
    #[error("Internal service error: {0}")]
    InternalService(ServiceError),

    /// The entity is locked by another change set.
    #[error("Resource in use: {0}")]
    ResourceInUse(ServiceError),

    /// The change set or entity was not found.
    #[error("Resource not found: {0}")]
    ResourceNotFound(ServiceError),

    /// The entity type does not support the operation.
    #[error("Resource not supported: {0}")]
    ResourceNotSupported(ServiceError),

    /// A service quota would be exceeded.
    #[error("Service quota exceeded: {0}")]
    ServiceQuotaExceeded(ServiceError),

    /// Too many requests.
    #[error("Throttling: {0}")]
    Throttling(ServiceError),

    /// The input failed validation.
    #[error("Validation error: {0}")]
    Validation(ServiceError),

    /// An error code this crate does not model.
    #[error("Service error: {0}")]
    Service(ServiceError),

    /// A failure that happened before or outside the service.
    #[error(transparent)]
    Client(AwsError),
}

impl MarketplaceCatalogError {
    /// Underlying service error, if the service answered.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::AccessDenied(e)
            | Self::InternalService(e)
            | Self::ResourceInUse(e)
            | Self::ResourceNotFound(e)
            | Self::ResourceNotSupported(e)
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
            Self::InternalService(_) | Self::Throttling(_) => true,
            Self::Client(e) => e.is_retryable(),
            _ => self.service_error().map_or(false, ServiceError::is_retryable),
        }
    }
}

impl From<AwsError> for MarketplaceCatalogError {
    fn from(err: AwsError) -> Self {
        match err {
            AwsError::Service(service) => map_marketplace_catalog_error(service),
            other => Self::Client(other),
        }
    }
}

/// Result type for Marketplace Catalog operations.
pub type Result<T> = std::result::Result<T, MarketplaceCatalogError>;
