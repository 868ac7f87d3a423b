//! AWS error code to typed error mapping.

use super::QldbError;
use aws_runtime::ServiceError;

/// Map a parsed service error to its typed variant.
pub fn map_qldb_error(error: ServiceError) -> QldbError {
    match error.code.as_str() {
        "InvalidParameterException" => QldbError::InvalidParameter(error),
        "LimitExceededException" => QldbError::LimitExceeded(error),
        "ResourceAlreadyExistsException" => QldbError::ResourceAlreadyExists(error),
        "ResourceInUseException" => QldbError::ResourceInUse(error),
        "ResourceNotFoundException" => QldbError::ResourceNotFound(error),
        "ResourcePreconditionNotMetException" => QldbError::ResourcePreconditionNotMet(error),
        _ => QldbError::Service(error),
    }
}
