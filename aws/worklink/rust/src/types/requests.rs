//! Request types for WorkLink operations.
//!
//! Operations that only identify a fleet, domain or device take plain string
//! arguments on the service methods instead of a request type.

use super::common::*;
use serde::Serialize;
use std::collections::HashMap;

/// Input for `CreateFleet`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateFleetRequest {
    /// Unique fleet name.
    #[serde(rename = "FleetName")]
    pub fleet_name: String,
    /// Name shown to users.
    #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Optimize network routing for where users are.
    #[serde(
        rename = "OptimizeForEndUserLocation",
        skip_serializing_if = "Option::is_none"
    )]
    pub optimize_for_end_user_location: Option<bool>,
    /// Tags to attach.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreateFleetRequest {
    /// Create a request for a fleet name.
    pub fn new(fleet_name: impl Into<String>) -> Self {
        Self {
            fleet_name: fleet_name.into(),
            ..Default::default()
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set end-user location optimization.
    pub fn with_optimize_for_end_user_location(mut self, enabled: bool) -> Self {
        self.optimize_for_end_user_location = Some(enabled);
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Input for `UpdateFleetMetadata`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFleetMetadataRequest {
    /// Fleet ARN.
    #[serde(rename = "FleetArn")]
    pub fleet_arn: String,
    /// Name shown to users.
    #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Optimize network routing for where users are.
    #[serde(
        rename = "OptimizeForEndUserLocation",
        skip_serializing_if = "Option::is_none"
    )]
    pub optimize_for_end_user_location: Option<bool>,
}

impl UpdateFleetMetadataRequest {
    /// Create a request for a fleet.
    pub fn new(fleet_arn: impl Into<String>) -> Self {
        Self {
            fleet_arn: fleet_arn.into(),
            ..Default::default()
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set end-user location optimization.
    pub fn with_optimize_for_end_user_location(mut self, enabled: bool) -> Self {
        self.optimize_for_end_user_location = Some(enabled);
        self
    }
}

/// Pagination members shared by list operations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRequest {
    /// Fleet to list within. Ignored by `ListFleets`.
    #[serde(rename = "FleetArn", skip_serializing_if = "Option::is_none")]
    pub fleet_arn: Option<String>,
    /// Continuation token.
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListRequest {
    /// First page of a fleet-wide listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// First page of a listing within a fleet.
    pub fn for_fleet(fleet_arn: impl Into<String>) -> Self {
        Self {
            fleet_arn: Some(fleet_arn.into()),
            ..Default::default()
        }
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

/// Input for `UpdateAuditStreamConfiguration`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAuditStreamConfigurationRequest {
    /// Fleet ARN.
    #[serde(rename = "FleetArn")]
    pub fleet_arn: String,
    /// Kinesis stream receiving audit events; clears the setting when absent.
    #[serde(rename = "AuditStreamArn", skip_serializing_if = "Option::is_none")]
    pub audit_stream_arn: Option<String>,
}

/// Input for `UpdateCompanyNetworkConfiguration`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCompanyNetworkConfigurationRequest {
    /// Fleet ARN.
    #[serde(rename = "FleetArn")]
    pub fleet_arn: String,
    /// VPC with connectivity to the associated websites.
    #[serde(rename = "VpcId")]
    pub vpc_id: String,
    /// Subnets used for fleet network interfaces.
    #[serde(rename = "SubnetIds")]
    pub subnet_ids: Vec<String>,
    /// Security groups applied to the network interfaces.
    #[serde(rename = "SecurityGroupIds")]
    pub security_group_ids: Vec<String>,
}

/// Input for `UpdateDevicePolicyConfiguration`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDevicePolicyConfigurationRequest {
    /// Fleet ARN.
    #[serde(rename = "FleetArn")]
    pub fleet_arn: String,
    /// PEM-encoded certificate chain of the device CA.
    #[serde(rename = "DeviceCaCertificate", skip_serializing_if = "Option::is_none")]
    pub device_ca_certificate: Option<String>,
}

/// Input for `UpdateIdentityProviderConfiguration`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateIdentityProviderConfigurationRequest {
    /// Fleet ARN.
    #[serde(rename = "FleetArn")]
    pub fleet_arn: String,
    /// Provider type.
    #[serde(rename = "IdentityProviderType")]
    pub identity_provider_type: IdentityProviderType,
    /// SAML metadata document of the identity provider.
    #[serde(
        rename = "IdentityProviderSamlMetadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub identity_provider_saml_metadata: Option<String>,
}

impl UpdateIdentityProviderConfigurationRequest {
    /// SAML provider with its metadata document.
    pub fn saml(fleet_arn: impl Into<String>, metadata: impl Into<String>) -> Self {
        Self {
            fleet_arn: fleet_arn.into(),
            identity_provider_type: IdentityProviderType::Saml,
            identity_provider_saml_metadata: Some(metadata.into()),
        }
    }
}

/// Input for `AssociateDomain`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssociateDomainRequest {
    /// Fleet ARN.
    #[serde(rename = "FleetArn")]
    pub fleet_arn: String,
    /// Fully qualified domain name.
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    /// Name shown to users.
    #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// ACM certificate covering the domain.
    #[serde(rename = "AcmCertificateArn")]
    pub acm_certificate_arn: String,
}

impl AssociateDomainRequest {
    /// Create a request with the required members.
    pub fn new(
        fleet_arn: impl Into<String>,
        domain_name: impl Into<String>,
        acm_certificate_arn: impl Into<String>,
    ) -> Self {
        Self {
            fleet_arn: fleet_arn.into(),
            domain_name: domain_name.into(),
            display_name: None,
            acm_certificate_arn: acm_certificate_arn.into(),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Input for `UpdateDomainMetadata`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDomainMetadataRequest {
    /// Fleet ARN.
    #[serde(rename = "FleetArn")]
    pub fleet_arn: String,
    /// Domain name.
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    /// New display name.
    #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Input for `AssociateWebsiteAuthorizationProvider`.
#[derive(Debug, Clone, Serialize)]
pub struct AssociateWebsiteAuthorizationProviderRequest {
    /// Fleet ARN.
    #[serde(rename = "FleetArn")]
    pub fleet_arn: String,
    /// Provider type.
    #[serde(rename = "AuthorizationProviderType")]
    pub authorization_provider_type: AuthorizationProviderType,
    /// Domain of the provider; required for SAML providers.
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

impl AssociateWebsiteAuthorizationProviderRequest {
    /// SAML provider for a domain.
    pub fn saml(fleet_arn: impl Into<String>, domain_name: impl Into<String>) -> Self {
        Self {
            fleet_arn: fleet_arn.into(),
            authorization_provider_type: AuthorizationProviderType::Saml,
            domain_name: Some(domain_name.into()),
        }
    }
}

/// Input for `AssociateWebsiteCertificateAuthority`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssociateWebsiteCertificateAuthorityRequest {
    /// Fleet ARN.
    #[serde(rename = "FleetArn")]
    pub fleet_arn: String,
    /// PEM-encoded root certificate.
    #[serde(rename = "Certificate")]
    pub certificate: String,
    /// Name shown in the console.
    #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl AssociateWebsiteCertificateAuthorityRequest {
    /// Create a request with the required members.
    pub fn new(fleet_arn: impl Into<String>, certificate: impl Into<String>) -> Self {
        Self {
            fleet_arn: fleet_arn.into(),
            certificate: certificate.into(),
            display_name: None,
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Input for `TagResource`.
#[derive(Debug, Clone, Serialize)]
pub struct TagResourceRequest {
    /// Fleet ARN (path).
    #[serde(skip)]
    pub resource_arn: String,
    /// Tags to add or overwrite.
    #[serde(rename = "Tags")]
    pub tags: HashMap<String, String>,
}

impl TagResourceRequest {
    /// Create a request.
    pub fn new(resource_arn: impl Into<String>, tags: HashMap<String, String>) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fleet_body() {
        let request = CreateFleetRequest::new("field-staff")
            .with_display_name("Field Staff")
            .with_optimize_for_end_user_location(true);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "FleetName": "field-staff",
                "DisplayName": "Field Staff",
                "OptimizeForEndUserLocation": true
            })
        );
    }

    #[test]
    fn test_list_request_omits_unset_members() {
        let request = ListRequest::new().with_max_results(5);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "MaxResults": 5 })
        );
    }

    #[test]
    fn test_tag_resource_arn_not_in_body() {
        let mut tags = HashMap::new();
        tags.insert("env".to_string(), "prod".to_string());
        let request = TagResourceRequest::new("arn:aws:worklink::1:fleet/a", tags);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "Tags": { "env": "prod" } })
        );
    }
}
