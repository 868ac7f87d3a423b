//! AWS error code to typed error mapping.

use super::WorkLinkError;
use aws_runtime::ServiceError;

/// Map a parsed service error to its typed variant.
pub fn map_worklink_error(error: ServiceError) -> WorkLinkError {
    match error.code.as_str() {
        "InternalServerErrorException" => WorkLinkError::InternalServerError(error),
        "InvalidRequestException" => WorkLinkError::InvalidRequest(error),
        "ResourceAlreadyExistsException" => WorkLinkError::ResourceAlreadyExists(error),
        "ResourceNotFoundException" => WorkLinkError::ResourceNotFound(error),
        "TooManyRequestsException" => WorkLinkError::TooManyRequests(error),
        "UnauthorizedException" => WorkLinkError::Unauthorized(error),
        _ => WorkLinkError::Service(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("InternalServerErrorException", 500 ; "internal")]
    #[test_case("InvalidRequestException", 400 ; "invalid request")]
    #[test_case("ResourceAlreadyExistsException", 400 ; "already exists")]
    #[test_case("ResourceNotFoundException", 404 ; "not found")]
    #[test_case("TooManyRequestsException", 429 ; "throttled")]
    #[test_case("UnauthorizedException", 403 ; "unauthorized")]
    fn test_known_codes_are_typed(code: &str, status: u16) {
        let mapped = map_worklink_error(ServiceError::new(code, "msg", status));
        assert!(!matches!(mapped, WorkLinkError::Service(_) | WorkLinkError::Client(_)));
        assert_eq!(mapped.code(), Some(code));
        assert_eq!(mapped.status_code(), Some(status));
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let mapped = map_worklink_error(ServiceError::new("AccessDeniedException", "no", 403));
        assert!(matches!(mapped, WorkLinkError::Service(_)));
    }
}
