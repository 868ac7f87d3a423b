//! Shared CodeStar Connections types.

use serde::{Deserialize, Serialize};

/// Third-party source provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    /// Bitbucket Cloud.
    Bitbucket,
    /// GitHub.com.
    GitHub,
    /// Self-managed GitHub Enterprise Server, reached through a host.
    GitHubEnterpriseServer,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

impl ProviderType {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bitbucket => "Bitbucket",
            Self::GitHub => "GitHub",
            Self::GitHubEnterpriseServer => "GitHubEnterpriseServer",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether connections of this type go through a host.
    pub fn requires_host(&self) -> bool {
        matches!(self, Self::GitHubEnterpriseServer)
    }
}

/// Connection state. New connections stay `PENDING` until the handshake
/// with the provider is completed in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConnectionStatus {
    /// Waiting for the provider handshake.
    Pending,
    /// Usable.
    Available,
    /// Failed.
    Error,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// A resource tag. Tags are sent as a list of key/value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag key.
    #[serde(rename = "Key")]
    pub key: String,
    /// Tag value.
    #[serde(rename = "Value")]
    pub value: String,
}

impl Tag {
    /// Create a tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// VPC a host is reachable from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpcConfiguration {
    /// VPC ID.
    #[serde(rename = "VpcId")]
    pub vpc_id: String,
    /// Subnets in the VPC.
    #[serde(rename = "SubnetIds", default)]
    pub subnet_ids: Vec<String>,
    /// Security groups in the VPC.
    #[serde(rename = "SecurityGroupIds", default)]
    pub security_group_ids: Vec<String>,
    /// PEM certificate for a provider with a private CA.
    #[serde(rename = "TlsCertificate", skip_serializing_if = "Option::is_none", default)]
    pub tls_certificate: Option<String>,
}

impl VpcConfiguration {
    /// Create a configuration.
    pub fn new(vpc_id: impl Into<String>, subnet_ids: Vec<String>, security_group_ids: Vec<String>) -> Self {
        Self {
            vpc_id: vpc_id.into(),
            subnet_ids,
            security_group_ids,
            tls_certificate: None,
        }
    }

    /// Trust a certificate.
    pub fn with_tls_certificate(mut self, pem: impl Into<String>) -> Self {
        self.tls_certificate = Some(pem.into());
        self
    }
}

/// A connection to a repository provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Connection {
    /// Connection name.
    #[serde(rename = "ConnectionName", default)]
    pub connection_name: Option<String>,
    /// Connection ARN.
    #[serde(rename = "ConnectionArn", default)]
    pub connection_arn: Option<String>,
    /// Provider.
    #[serde(rename = "ProviderType", default)]
    pub provider_type: Option<ProviderType>,
    /// Account that owns the connection.
    #[serde(rename = "OwnerAccountId", default)]
    pub owner_account_id: Option<String>,
    /// Current state.
    #[serde(rename = "ConnectionStatus", default)]
    pub connection_status: Option<ConnectionStatus>,
    /// Host used by the connection.
    #[serde(rename = "HostArn", default)]
    pub host_arn: Option<String>,
}

/// Host entry returned by `ListHosts`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Host {
    /// Host name.
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Host ARN.
    #[serde(rename = "HostArn", default)]
    pub host_arn: Option<String>,
    /// Provider installed on the host.
    #[serde(rename = "ProviderType", default)]
    pub provider_type: Option<ProviderType>,
    /// Provider endpoint.
    #[serde(rename = "ProviderEndpoint", default)]
    pub provider_endpoint: Option<String>,
    /// VPC settings.
    #[serde(rename = "VpcConfiguration", default)]
    pub vpc_configuration: Option<VpcConfiguration>,
    /// Host status, such as `AVAILABLE` or `VPC_CONFIG_INITIALIZING`.
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    /// Detail for the status.
    #[serde(rename = "StatusMessage", default)]
    pub status_message: Option<String>,
}
