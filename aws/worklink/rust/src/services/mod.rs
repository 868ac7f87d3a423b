//! Service implementations for WorkLink operations.
//!
//! Apart from tagging, every WorkLink operation is a POST of a JSON body to
//! `/<operationName>` with the first letter lowercased.

mod authorization_providers;
mod certificate_authorities;
mod configuration;
mod devices;
mod domains;
mod fleets;
mod tags;

pub use authorization_providers::AuthorizationProvidersService;
pub use certificate_authorities::CertificateAuthoritiesService;
pub use configuration::ConfigurationService;
pub use devices::DevicesService;
pub use domains::DomainsService;
pub use fleets::FleetsService;
pub use tags::TagsService;

use aws_runtime::{AwsError, Method, OperationRequest};
use serde::Serialize;

/// Build a POST `/<operationName>` request carrying `input` as its body.
pub(crate) fn command<T: Serialize>(
    operation: &'static str,
    input: &T,
) -> Result<OperationRequest, AwsError> {
    let mut chars = operation.chars();
    let path = match chars.next() {
        Some(first) => format!("/{}{}", first.to_ascii_lowercase(), chars.as_str()),
        None => "/".to_string(),
    };
    OperationRequest::rest(operation, Method::Post, path).with_json_body(input)
}

/// Reject an empty identifier before any I/O.
pub(crate) fn require(member: &str, value: &str) -> Result<(), AwsError> {
    if value.is_empty() {
        return Err(AwsError::validation(format!("{} must not be empty", member)));
    }
    Ok(())
}

#[derive(Serialize)]
pub(crate) struct FleetRef<'a> {
    #[serde(rename = "FleetArn")]
    pub fleet_arn: &'a str,
}

#[derive(Serialize)]
pub(crate) struct DomainRef<'a> {
    #[serde(rename = "FleetArn")]
    pub fleet_arn: &'a str,
    #[serde(rename = "DomainName")]
    pub domain_name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_path() {
        let op = command("DescribeFleetMetadata", &FleetRef { fleet_arn: "arn" }).unwrap();
        assert_eq!(op.path, "/describeFleetMetadata");
        assert_eq!(op.method, Method::Post);
    }

    #[test]
    fn test_require() {
        assert!(require("FleetArn", "").is_err());
        assert!(require("FleetArn", "arn:aws:worklink::1:fleet/a").is_ok());
    }
}
