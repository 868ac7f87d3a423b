//! AWS error code to typed error mapping.

use super::CodeStarConnectionsError;
use aws_runtime::ServiceError;

/// Map a parsed service error to its typed variant.
pub fn map_codestar_connections_error(error: ServiceError) -> CodeStarConnectionsError {
    match error.code.as_str() {
        "ConflictException" => CodeStarConnectionsError::Conflict(error),
        "LimitExceededException" => CodeStarConnectionsError::LimitExceeded(error),
        "ResourceNotFoundException" => CodeStarConnectionsError::ResourceNotFound(error),
        "ResourceUnavailableException" => CodeStarConnectionsError::ResourceUnavailable(error),
        "UnsupportedOperationException" => CodeStarConnectionsError::UnsupportedOperation(error),
        _ => CodeStarConnectionsError::Service(error),
    }
}
