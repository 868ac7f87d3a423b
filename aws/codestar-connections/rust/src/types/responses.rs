//! Response types for CodeStar Connections operations.

use super::common::*;
use serde::Deserialize;

/// Output of `CreateConnection`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateConnectionOutput {
    /// ARN of the new connection.
    #[serde(rename = "ConnectionArn", default)]
    pub connection_arn: Option<String>,
    /// Tags applied.
    #[serde(rename = "Tags", default)]
    pub tags: Vec<Tag>,
}

/// Output of `CreateHost`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateHostOutput {
    /// ARN of the new host.
    #[serde(rename = "HostArn", default)]
    pub host_arn: Option<String>,
    /// Tags applied.
    #[serde(rename = "Tags", default)]
    pub tags: Vec<Tag>,
}

/// Output of `GetConnection`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetConnectionOutput {
    /// The connection.
    #[serde(rename = "Connection", default)]
    pub connection: Option<Connection>,
}

/// Output of `GetHost`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetHostOutput {
    /// Host name.
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Host status.
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    /// Provider installed on the host.
    #[serde(rename = "ProviderType", default)]
    pub provider_type: Option<ProviderType>,
    /// Provider endpoint.
    #[serde(rename = "ProviderEndpoint", default)]
    pub provider_endpoint: Option<String>,
    /// VPC settings.
    #[serde(rename = "VpcConfiguration", default)]
    pub vpc_configuration: Option<VpcConfiguration>,
}

/// Output of `ListConnections`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListConnectionsOutput {
    /// Connections in the page.
    #[serde(rename = "Connections", default)]
    pub connections: Vec<Connection>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `ListHosts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListHostsOutput {
    /// Hosts in the page.
    #[serde(rename = "Hosts", default)]
    pub hosts: Vec<Host>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTagsForResourceOutput {
    /// Tags on the resource.
    #[serde(rename = "Tags", default)]
    pub tags: Vec<Tag>,
}
