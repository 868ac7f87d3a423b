//! Response types for WorkLink operations.

use super::common::*;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Output of `CreateFleet`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFleetOutput {
    /// ARN of the new fleet.
    #[serde(rename = "FleetArn", default)]
    pub fleet_arn: Option<String>,
}

/// Output of `DescribeFleetMetadata`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeFleetMetadataOutput {
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
    /// End-user location optimization.
    #[serde(rename = "OptimizeForEndUserLocation", default)]
    pub optimize_for_end_user_location: Option<bool>,
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

/// Output of `ListFleets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFleetsOutput {
    /// Fleets in the page.
    #[serde(rename = "FleetSummaryList", default)]
    pub fleet_summary_list: Vec<FleetSummary>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `DescribeAuditStreamConfiguration`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeAuditStreamConfigurationOutput {
    /// Kinesis stream receiving audit events.
    #[serde(rename = "AuditStreamArn", default)]
    pub audit_stream_arn: Option<String>,
}

/// Output of `DescribeCompanyNetworkConfiguration`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeCompanyNetworkConfigurationOutput {
    /// VPC ID.
    #[serde(rename = "VpcId", default)]
    pub vpc_id: Option<String>,
    /// Subnet IDs.
    #[serde(rename = "SubnetIds", default)]
    pub subnet_ids: Vec<String>,
    /// Security group IDs.
    #[serde(rename = "SecurityGroupIds", default)]
    pub security_group_ids: Vec<String>,
}

/// Output of `DescribeDevicePolicyConfiguration`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeDevicePolicyConfigurationOutput {
    /// PEM-encoded device CA certificate chain.
    #[serde(rename = "DeviceCaCertificate", default)]
    pub device_ca_certificate: Option<String>,
}

/// Output of `DescribeIdentityProviderConfiguration`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeIdentityProviderConfigurationOutput {
    /// Provider type.
    #[serde(rename = "IdentityProviderType", default)]
    pub identity_provider_type: Option<IdentityProviderType>,
    /// SAML metadata of WorkLink as a service provider.
    #[serde(rename = "ServiceProviderSamlMetadata", default)]
    pub service_provider_saml_metadata: Option<String>,
    /// SAML metadata of the identity provider.
    #[serde(rename = "IdentityProviderSamlMetadata", default)]
    pub identity_provider_saml_metadata: Option<String>,
}

/// Output of `DescribeDomain`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeDomainOutput {
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
    /// ACM certificate of the domain.
    #[serde(rename = "AcmCertificateArn", default)]
    pub acm_certificate_arn: Option<String>,
}

/// Output of `ListDomains`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDomainsOutput {
    /// Domains in the page.
    #[serde(rename = "Domains", default)]
    pub domains: Vec<DomainSummary>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `DescribeDevice`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeDeviceOutput {
    /// Status.
    #[serde(rename = "Status", default)]
    pub status: Option<DeviceStatus>,
    /// Device model.
    #[serde(rename = "Model", default)]
    pub model: Option<String>,
    /// Device manufacturer.
    #[serde(rename = "Manufacturer", default)]
    pub manufacturer: Option<String>,
    /// Operating system.
    #[serde(rename = "OperatingSystem", default)]
    pub operating_system: Option<String>,
    /// Operating system version.
    #[serde(rename = "OperatingSystemVersion", default)]
    pub operating_system_version: Option<String>,
    /// Operating system patch level.
    #[serde(rename = "PatchLevel", default)]
    pub patch_level: Option<String>,
    /// First access time.
    #[serde(
        rename = "FirstAccessedTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub first_accessed_time: Option<DateTime<Utc>>,
    /// Last access time.
    #[serde(
        rename = "LastAccessedTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub last_accessed_time: Option<DateTime<Utc>>,
    /// User signed in on the device.
    #[serde(rename = "Username", default)]
    pub username: Option<String>,
}

/// Output of `ListDevices`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDevicesOutput {
    /// Devices in the page.
    #[serde(rename = "Devices", default)]
    pub devices: Vec<DeviceSummary>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `AssociateWebsiteAuthorizationProvider`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssociateWebsiteAuthorizationProviderOutput {
    /// Provider identifier.
    #[serde(rename = "AuthorizationProviderId", default)]
    pub authorization_provider_id: Option<String>,
}

/// Output of `ListWebsiteAuthorizationProviders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWebsiteAuthorizationProvidersOutput {
    /// Providers in the page.
    #[serde(rename = "WebsiteAuthorizationProviders", default)]
    pub website_authorization_providers: Vec<WebsiteAuthorizationProviderSummary>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `AssociateWebsiteCertificateAuthority`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssociateWebsiteCertificateAuthorityOutput {
    /// Certificate authority identifier.
    #[serde(rename = "WebsiteCaId", default)]
    pub website_ca_id: Option<String>,
}

/// Output of `DescribeWebsiteCertificateAuthority`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeWebsiteCertificateAuthorityOutput {
    /// PEM-encoded root certificate.
    #[serde(rename = "Certificate", default)]
    pub certificate: Option<String>,
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

/// Output of `ListWebsiteCertificateAuthorities`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWebsiteCertificateAuthoritiesOutput {
    /// Certificate authorities in the page.
    #[serde(rename = "WebsiteCertificateAuthorities", default)]
    pub website_certificate_authorities: Vec<WebsiteCaSummary>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTagsForResourceOutput {
    /// Tags on the fleet.
    #[serde(rename = "Tags", default)]
    pub tags: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_device_output() {
        let output: DescribeDeviceOutput = serde_json::from_str(
            r#"{
                "Status": "SIGNED_OUT",
                "Model": "iPhone12,1",
                "Manufacturer": "Apple",
                "OperatingSystem": "iOS",
                "OperatingSystemVersion": "14.2",
                "FirstAccessedTime": 1600000000,
                "LastAccessedTime": 1600003600.5,
                "Username": "jdoe"
            }"#,
        )
        .unwrap();

        assert_eq!(output.status, Some(DeviceStatus::SignedOut));
        assert_eq!(output.username.as_deref(), Some("jdoe"));
        assert_eq!(
            output.last_accessed_time.unwrap().timestamp_millis(),
            1_600_003_600_500
        );
        assert!(output.patch_level.is_none());
    }

    #[test]
    fn test_list_providers_output() {
        let output: ListWebsiteAuthorizationProvidersOutput = serde_json::from_str(
            r#"{"WebsiteAuthorizationProviders":[{"AuthorizationProviderId":"p-1","AuthorizationProviderType":"SAML","DomainName":"auth.example.com"}]}"#,
        )
        .unwrap();

        let provider = &output.website_authorization_providers[0];
        assert_eq!(provider.authorization_provider_type, AuthorizationProviderType::Saml);
        assert!(output.next_token.is_none());
    }
}
