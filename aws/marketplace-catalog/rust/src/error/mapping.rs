//! AWS error code to typed error mapping.

use super::MarketplaceCatalogError;
use aws_runtime::ServiceError;

/// Map a parsed service error to its typed variant.
pub fn map_marketplace_catalog_error(error: ServiceError) -> MarketplaceCatalogError {
    match error.code.as_str() {
        "AccessDeniedException" => MarketplaceCatalogError::AccessDenied(error),
        "InternalServiceException" => MarketplaceCatalogError::InternalService(error),
        "ResourceInUseException" => MarketplaceCatalogError::ResourceInUse(error),
        "ResourceNotFoundException" => MarketplaceCatalogError::ResourceNotFound(error),
        "ResourceNotSupportedException" => MarketplaceCatalogError::ResourceNotSupported(error),
        "ServiceQuotaExceededException" => MarketplaceCatalogError::ServiceQuotaExceeded(error),
        "ThrottlingException" => MarketplaceCatalogError::Throttling(error),
        "ValidationException" => MarketplaceCatalogError::Validation(error),
        _ => MarketplaceCatalogError::Service(error),
    }
}
