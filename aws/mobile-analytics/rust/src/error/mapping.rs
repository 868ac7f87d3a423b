//! AWS error code to typed error mapping.

use super::MobileAnalyticsError;
use aws_runtime::ServiceError;

/// Map a parsed service error to its typed variant.
pub fn map_mobile_analytics_error(error: ServiceError) -> MobileAnalyticsError {
    match error.code.as_str() {
        "BadRequestException" => MobileAnalyticsError::BadRequest(error),
        _ => MobileAnalyticsError::Service(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("BadRequestException", 400, false ; "bad request")]
    #[test_case("InternalFailure", 500, true ; "server fault falls back")]
    #[test_case("ThrottlingException", 400, true ; "throttling falls back")]
    fn test_mapping(code: &str, status: u16, retryable: bool) {
        let mapped = map_mobile_analytics_error(ServiceError::new(code, "msg", status));
        assert_eq!(
            matches!(mapped, MobileAnalyticsError::BadRequest(_)),
            code == "BadRequestException"
        );
        assert_eq!(mapped.is_retryable(), retryable);
        assert_eq!(mapped.status_code(), Some(status));
    }
}
