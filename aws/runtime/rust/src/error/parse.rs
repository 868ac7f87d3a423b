//! Decoding of AWS JSON error responses.

use super::ServiceError;
use crate::transport::HttpResponse;
use serde_json::{Map, Value};

const CODE_KEYS: &[&str] = &["__type", "code", "Code"];
const MESSAGE_KEYS: &[&str] = &["message", "Message", "errorMessage"];

/// Parse a failed HTTP response into a [`ServiceError`].
///
/// The error code comes from the `x-amzn-ErrorType` header when present and
/// otherwise from the body. Namespace prefixes (`aws.protocoltests#`) and URI
/// suffixes (`:http://...`) are removed.
pub fn parse_service_error(response: &HttpResponse) -> ServiceError {
    let mut members = match serde_json::from_slice::<Value>(&response.body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    let header_code = response
        .error_type()
        .map(sanitize_code)
        .filter(|c| !c.is_empty());

    let mut body_code = None;
    for key in CODE_KEYS {
        if let Some(Value::String(code)) = members.remove(*key) {
            if body_code.is_none() {
                body_code = Some(sanitize_code(&code));
            }
        }
    }

    let mut message = None;
    for key in MESSAGE_KEYS {
        if let Some(Value::String(text)) = members.remove(*key) {
            if message.is_none() {
                message = Some(text);
            }
        }
    }

    let code = header_code
        .or(body_code)
        .unwrap_or_else(|| fallback_code(response.status).to_string());

    let message = message.unwrap_or_else(|| {
        if response.body.is_empty() {
            String::new()
        } else {
            String::from_utf8_lossy(&response.body)
                .chars()
                .take(256)
                .collect()
        }
    });

    ServiceError {
        code,
        message,
        status: response.status,
        request_id: response.request_id().map(String::from),
        members,
    }
}

fn sanitize_code(raw: &str) -> String {
    let without_uri = raw.split(':').next().unwrap_or(raw);
    let without_namespace = without_uri.rsplit('#').next().unwrap_or(without_uri);
    without_namespace.trim().to_string()
}

fn fallback_code(status: u16) -> &'static str {
    match status {
        400 => "BadRequest",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "NotFound",
        409 => "Conflict",
        413 => "RequestEntityTooLarge",
        429 => "TooManyRequests",
        500 => "InternalServerError",
        502 => "BadGateway",
        503 => "ServiceUnavailable",
        504 => "GatewayTimeout",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::collections::HashMap;
    use test_case::test_case;

    fn response(status: u16, headers: &[(&str, &str)], body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_code_from_body_type_with_namespace() {
        let resp = response(
            400,
            &[("x-amzn-RequestId", "req-9")],
            r#"{"__type":"com.amazonaws.codestar.connections#ResourceNotFoundException","Message":"no such connection"}"#,
        );
        let err = parse_service_error(&resp);
        assert_eq!(err.code, "ResourceNotFoundException");
        assert_eq!(err.message, "no such connection");
        assert_eq!(err.request_id.as_deref(), Some("req-9"));
        assert!(err.members.is_empty());
    }

    #[test]
    fn test_header_takes_precedence() {
        let resp = response(
            404,
            &[("x-amzn-ErrorType", "ResourceNotFoundException:http://internal.amazon.com/")],
            r#"{"code":"SomethingElse","message":"gone"}"#,
        );
        let err = parse_service_error(&resp);
        assert_eq!(err.code, "ResourceNotFoundException");
        assert_eq!(err.message, "gone");
    }

    #[test]
    fn test_extra_members_retained() {
        let resp = response(
            409,
            &[],
            r#"{"Message":"in use","ResourceType":"LEDGER","ResourceName":"books","__type":"ResourceInUseException"}"#,
        );
        let err = parse_service_error(&resp);
        assert_eq!(err.code, "ResourceInUseException");
        assert_eq!(err.member_str("ResourceType"), Some("LEDGER"));
        assert_eq!(err.member_str("ResourceName"), Some("books"));
        assert_eq!(err.members.len(), 2);
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let resp = response(503, &[], "<html>Service Unavailable</html>");
        let err = parse_service_error(&resp);
        assert_eq!(err.code, "ServiceUnavailable");
        assert_eq!(err.message, "<html>Service Unavailable</html>");
    }

    #[test]
    fn test_empty_body() {
        let err = parse_service_error(&response(403, &[], ""));
        assert_eq!(err.code, "Forbidden");
        assert!(err.message.is_empty());
    }

    #[test_case("aws.foo#BarException", "BarException" ; "namespace")]
    #[test_case("BarException:http://internal.amazon.com/", "BarException" ; "uri suffix")]
    #[test_case("com.amazonaws.qldb#BarException:http://x", "BarException" ; "both")]
    #[test_case(" BarException ", "BarException" ; "whitespace")]
    fn test_sanitize_code(raw: &str, expected: &str) {
        assert_eq!(sanitize_code(raw), expected);
    }

    #[test_case(400, "BadRequest")]
    #[test_case(404, "NotFound")]
    #[test_case(429, "TooManyRequests")]
    #[test_case(504, "GatewayTimeout")]
    #[test_case(418, "Unknown")]
    fn test_fallback_code(status: u16, expected: &str) {
        assert_eq!(parse_service_error(&response(status, &[], "")).code, expected);
    }
}
