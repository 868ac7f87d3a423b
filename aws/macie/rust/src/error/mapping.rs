//! AWS error code to typed error mapping.

use super::MacieError;
use aws_runtime::ServiceError;

/// Map a parsed service error to its typed variant.
pub fn map_macie_error(error: ServiceError) -> MacieError {
    match error.code.as_str() {
        "AccessDeniedException" => MacieError::AccessDenied(error),
        "ConflictException" => MacieError::Conflict(error),
        "InternalServerException" => MacieError::InternalServer(error),
        "ResourceNotFoundException" => MacieError::ResourceNotFound(error),
        "ServiceQuotaExceededException" => MacieError::ServiceQuotaExceeded(error),
        "ThrottlingException" => MacieError::Throttling(error),
        "ValidationException" => MacieError::Validation(error),
        _ => MacieError::Service(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("AccessDeniedException", 403 ; "access denied")]
    #[test_case("ConflictException", 409 ; "conflict")]
    #[test_case("InternalServerException", 500 ; "internal")]
    #[test_case("ResourceNotFoundException", 404 ; "not found")]
    #[test_case("ServiceQuotaExceededException", 402 ; "quota")]
    #[test_case("ThrottlingException", 429 ; "throttling")]
    #[test_case("ValidationException", 400 ; "validation")]
    fn test_known_codes_are_typed(code: &str, status: u16) {
        let mapped = map_macie_error(ServiceError::new(code, "msg", status));
        assert!(!matches!(mapped, MacieError::Service(_) | MacieError::Client(_)));
        assert_eq!(mapped.code(), Some(code));
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let mapped = map_macie_error(ServiceError::new("UnknownOperationException", "?", 404));
        assert!(matches!(mapped, MacieError::Service(_)));
    }
}
