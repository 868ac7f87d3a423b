//! Request types for CodeStar Connections operations.

use super::common::*;
use serde::Serialize;

/// Input for `CreateConnection`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateConnectionRequest {
    /// Provider; omitted when the connection uses a host.
    #[serde(rename = "ProviderType", skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<ProviderType>,
    /// Name, unique in the account.
    #[serde(rename = "ConnectionName")]
    pub connection_name: String,
    /// Tags.
    #[serde(rename = "Tags", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Host for an installed provider.
    #[serde(rename = "HostArn", skip_serializing_if = "Option::is_none")]
    pub host_arn: Option<String>,
}

impl CreateConnectionRequest {
    /// Connection to a cloud provider.
    pub fn new(connection_name: impl Into<String>, provider_type: ProviderType) -> Self {
        Self {
            connection_name: connection_name.into(),
            provider_type: Some(provider_type),
            ..Default::default()
        }
    }

    /// Connection through a host.
    pub fn for_host(connection_name: impl Into<String>, host_arn: impl Into<String>) -> Self {
        Self {
            connection_name: connection_name.into(),
            host_arn: Some(host_arn.into()),
            ..Default::default()
        }
    }

    /// Add a tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }
}

/// Input for `CreateHost`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateHostRequest {
    /// Host name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Provider installed on the host.
    #[serde(rename = "ProviderType")]
    pub provider_type: ProviderType,
    /// Provider endpoint URL.
    #[serde(rename = "ProviderEndpoint")]
    pub provider_endpoint: String,
    /// VPC, when the provider is not publicly reachable.
    #[serde(rename = "VpcConfiguration", skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfiguration>,
    /// Tags.
    #[serde(rename = "Tags", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CreateHostRequest {
    /// Create a request with the required members.
    pub fn new(
        name: impl Into<String>,
        provider_type: ProviderType,
        provider_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            provider_type,
            provider_endpoint: provider_endpoint.into(),
            vpc_configuration: None,
            tags: Vec::new(),
        }
    }

    /// Reach the provider through a VPC.
    pub fn with_vpc_configuration(mut self, vpc: VpcConfiguration) -> Self {
        self.vpc_configuration = Some(vpc);
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }
}

/// Input for `UpdateHost`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateHostRequest {
    /// Host ARN.
    #[serde(rename = "HostArn")]
    pub host_arn: String,
    /// New provider endpoint.
    #[serde(rename = "ProviderEndpoint", skip_serializing_if = "Option::is_none")]
    pub provider_endpoint: Option<String>,
    /// New VPC settings.
    #[serde(rename = "VpcConfiguration", skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<VpcConfiguration>,
}

impl UpdateHostRequest {
    /// Update a host.
    pub fn new(host_arn: impl Into<String>) -> Self {
        Self {
            host_arn: host_arn.into(),
            ..Default::default()
        }
    }

    /// Change the provider endpoint.
    pub fn with_provider_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.provider_endpoint = Some(endpoint.into());
        self
    }

    /// Change the VPC settings.
    pub fn with_vpc_configuration(mut self, vpc: VpcConfiguration) -> Self {
        self.vpc_configuration = Some(vpc);
        self
    }
}

/// Input for `ListConnections`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListConnectionsRequest {
    /// Only connections to this provider.
    #[serde(rename = "ProviderTypeFilter", skip_serializing_if = "Option::is_none")]
    pub provider_type_filter: Option<ProviderType>,
    /// Only connections through this host.
    #[serde(rename = "HostArnFilter", skip_serializing_if = "Option::is_none")]
    pub host_arn_filter: Option<String>,
    /// Page size (1 to 100).
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListConnectionsRequest {
    /// All connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by provider.
    pub fn with_provider_type(mut self, provider_type: ProviderType) -> Self {
        self.provider_type_filter = Some(provider_type);
        self
    }

    /// Filter by host.
    pub fn with_host_arn(mut self, host_arn: impl Into<String>) -> Self {
        self.host_arn_filter = Some(host_arn.into());
        self
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max: i32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Continue from a previous page.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

/// Input for `ListHosts`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListHostsRequest {
    /// Page size (0 to 100).
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListHostsRequest {
    /// First page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max: i32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Continue from a previous page.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_connection_body() {
        let request = CreateConnectionRequest::new("my-github", ProviderType::GitHub)
            .with_tag("team", "platform");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "ProviderType": "GitHub",
                "ConnectionName": "my-github",
                "Tags": [{"Key": "team", "Value": "platform"}]
            })
        );
    }

    #[test]
    fn test_host_connection_omits_provider() {
        let request = CreateConnectionRequest::for_host("ghes", "arn:aws:codestar-connections:us-east-1:1:host/h-1");
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("ProviderType").is_none());
        assert!(json.get("Tags").is_none());
        assert_eq!(json["HostArn"], "arn:aws:codestar-connections:us-east-1:1:host/h-1");
    }
}
