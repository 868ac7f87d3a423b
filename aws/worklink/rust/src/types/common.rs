//! Shared WorkLink types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fleet lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FleetStatus {
    /// Being created.
    Creating,
    /// Ready.
    Active,
    /// Being deleted.
    Deleting,
    /// Deleted.
    Deleted,
    /// Creation failed.
    FailedToCreate,
    /// Deletion failed.
    FailedToDelete,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Status of a domain associated with a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainStatus {
    /// Waiting for DNS validation.
    PendingValidation,
    /// Being associated.
    Associating,
    /// Users can reach the domain.
    Active,
    /// Access is revoked.
    Inactive,
    /// Being disassociated.
    Disassociating,
    /// Disassociated.
    Disassociated,
    /// Association failed.
    FailedToAssociate,
    /// Disassociation failed.
    FailedToDisassociate,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Status of a user device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    /// Signed in.
    Active,
    /// Signed out.
    SignedOut,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Kind of website authorization provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationProviderType {
    /// SAML 2.0 provider.
    #[serde(rename = "SAML")]
    Saml,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Kind of user identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityProviderType {
    /// SAML 2.0 provider.
    #[serde(rename = "SAML")]
    Saml,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Fleet entry in `ListFleets`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FleetSummary {
    /// Fleet ARN.
    #[serde(rename = "FleetArn", default)]
    pub fleet_arn: Option<String>,
    /// Creation time.
    #[serde(
        rename = "CreatedTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub created_time: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(
        rename = "LastUpdatedTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub last_updated_time: Option<DateTime<Utc>>,
    /// Fleet name.
    #[serde(rename = "FleetName", default)]
    pub fleet_name: Option<String>,
    /// Name shown to users.
    #[serde(rename = "DisplayName", default)]
    pub display_name: Option<String>,
    /// Identifier users enter in the WorkLink app.
    #[serde(rename = "CompanyCode", default)]
    pub company_code: Option<String>,
    /// Status.
    #[serde(rename = "FleetStatus", default)]
    pub fleet_status: Option<FleetStatus>,
    /// Tags.
    #[serde(rename = "Tags", default)]
    pub tags: HashMap<String, String>,
}

/// Domain entry in `ListDomains`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DomainSummary {
    /// Domain name.
    #[serde(rename = "DomainName", default)]
    pub domain_name: Option<String>,
    /// Name shown to users.
    #[serde(rename = "DisplayName", default)]
    pub display_name: Option<String>,
    /// Association time.
    #[serde(
        rename = "CreatedTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub created_time: Option<DateTime<Utc>>,
    /// Status.
    #[serde(rename = "DomainStatus", default)]
    pub domain_status: Option<DomainStatus>,
}

/// Device entry in `ListDevices`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeviceSummary {
    /// Device identifier.
    #[serde(rename = "DeviceId", default)]
    pub device_id: Option<String>,
    /// Status.
    #[serde(rename = "DeviceStatus", default)]
    pub device_status: Option<DeviceStatus>,
}

/// Authorization provider entry in `ListWebsiteAuthorizationProviders`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebsiteAuthorizationProviderSummary {
    /// Provider identifier.
    #[serde(rename = "AuthorizationProviderId", default)]
    pub authorization_provider_id: Option<String>,
    /// Provider type.
    #[serde(rename = "AuthorizationProviderType")]
    pub authorization_provider_type: AuthorizationProviderType,
    /// Domain of the provider.
    #[serde(rename = "DomainName", default)]
    pub domain_name: Option<String>,
    /// Association time.
    #[serde(
        rename = "CreatedTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub created_time: Option<DateTime<Utc>>,
}

/// Certificate authority entry in `ListWebsiteCertificateAuthorities`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WebsiteCaSummary {
    /// Certificate authority identifier.
    #[serde(rename = "WebsiteCaId", default)]
    pub website_ca_id: Option<String>,
    /// Import time.
    #[serde(
        rename = "CreatedTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub created_time: Option<DateTime<Utc>>,
    /// Name shown in the console.
    #[serde(rename = "DisplayName", default)]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_is_tolerated() {
        let summary: FleetSummary =
            serde_json::from_str(r#"{"FleetArn":"arn:aws:worklink::1:fleet/a","FleetStatus":"MIGRATING"}"#)
                .unwrap();
        assert_eq!(summary.fleet_status, Some(FleetStatus::Unknown));
    }

    #[test]
    fn test_saml_wire_name() {
        assert_eq!(
            serde_json::to_value(AuthorizationProviderType::Saml).unwrap(),
            serde_json::json!("SAML")
        );
        assert_eq!(
            serde_json::from_str::<IdentityProviderType>(r#""SAML""#).unwrap(),
            IdentityProviderType::Saml
        );
    }

    #[test]
    fn test_domain_summary_times() {
        let summary: DomainSummary = serde_json::from_str(
            r#"{"DomainName":"intranet.example.com","CreatedTime":1.5E9,"DomainStatus":"PENDING_VALIDATION"}"#,
        )
        .unwrap();
        assert_eq!(summary.created_time.unwrap().timestamp(), 1_500_000_000);
        assert_eq!(summary.domain_status, Some(DomainStatus::PendingValidation));
    }
}
