//! Path template resolution.

use crate::error::{AwsError, RequestError};
use crate::signing::uri_encode_path_segment;

/// Substitute `{label}` placeholders in a REST path template.
///
/// Values are percent-encoded as a single segment, so `/` and `:` inside an
/// ARN are escaped. A placeholder without a value, or with an empty value,
/// fails before any I/O.
///
/// ```
/// use aws_runtime::protocol::resolve_path;
///
/// let path = resolve_path("/ledgers/{name}/journal-s3-exports", &[("name", "my ledger")]).unwrap();
/// assert_eq!(path, "/ledgers/my%20ledger/journal-s3-exports");
/// ```
pub fn resolve_path(template: &str, labels: &[(&str, &str)]) -> Result<String, AwsError> {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        resolved.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            AwsError::validation(format!("unterminated label in path template '{}'", template))
        })?;
        let name = &after[..close];

        let value = labels
            .iter()
            .find(|(label, _)| *label == name)
            .map(|(_, value)| *value)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                AwsError::Request(RequestError::MissingPathParameter {
                    name: name.to_string(),
                })
            })?;

        resolved.push_str(&uri_encode_path_segment(value));
        rest = &after[close + 1..];
    }

    resolved.push_str(rest);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_single_label() {
        let path = resolve_path("/ledgers/{name}", &[("name", "books")]).unwrap();
        assert_eq!(path, "/ledgers/books");
    }

    #[test]
    fn test_resolve_multiple_labels() {
        let path = resolve_path(
            "/ledgers/{name}/journal-kinesis-streams/{streamId}",
            &[("name", "books"), ("streamId", "abc123")],
        )
        .unwrap();
        assert_eq!(path, "/ledgers/books/journal-kinesis-streams/abc123");
    }

    #[test]
    fn test_resolve_encodes_arn() {
        let path = resolve_path(
            "/tags/{resourceArn}",
            &[("resourceArn", "arn:aws:qldb:us-east-1:123456789012:ledger/books")],
        )
        .unwrap();
        assert_eq!(
            path,
            "/tags/arn%3Aaws%3Aqldb%3Aus-east-1%3A123456789012%3Aledger%2Fbooks"
        );
    }

    #[test]
    fn test_resolve_empty_value_rejected() {
        match resolve_path("/ledgers/{name}/journal-s3-exports", &[("name", "")]) {
            Err(AwsError::Request(RequestError::MissingPathParameter { name })) => {
                assert_eq!(name, "name");
            }
            other => panic!("expected MissingPathParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_missing_label_rejected() {
        assert!(resolve_path("/jobs/{jobId}", &[]).is_err());
    }

    #[test]
    fn test_resolve_no_labels() {
        assert_eq!(resolve_path("/macie", &[]).unwrap(), "/macie");
    }
}
