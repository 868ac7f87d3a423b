//! Website certificate authorities.

use super::{command, require};
use crate::error::WorkLinkError;
use crate::types::*;
use aws_runtime::ServiceClient;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
struct CaRef<'a> {
    #[serde(rename = "FleetArn")]
    fleet_arn: &'a str,
    #[serde(rename = "WebsiteCaId")]
    website_ca_id: &'a str,
}

/// Service for root certificates trusted when fetching internal websites.
pub struct CertificateAuthoritiesService {
    client: Arc<ServiceClient>,
}

impl CertificateAuthoritiesService {
    /// Create a new certificate authorities service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Import a root certificate into a fleet.
    pub async fn associate_website_certificate_authority(
        &self,
        request: AssociateWebsiteCertificateAuthorityRequest,
    ) -> Result<AssociateWebsiteCertificateAuthorityOutput, WorkLinkError> {
        require("FleetArn", &request.fleet_arn)?;
        require("Certificate", &request.certificate)?;
        let op = command("AssociateWebsiteCertificateAuthority", &request)?;

        let output: AssociateWebsiteCertificateAuthorityOutput = self.client.invoke_json(op).await?;
        info!(fleet = %request.fleet_arn, ca = ?output.website_ca_id, "Imported certificate authority");
        Ok(output)
    }

    /// Describe a certificate authority.
    pub async fn describe_website_certificate_authority(
        &self,
        fleet_arn: &str,
        website_ca_id: &str,
    ) -> Result<DescribeWebsiteCertificateAuthorityOutput, WorkLinkError> {
        let op = command(
            "DescribeWebsiteCertificateAuthority",
            &ca_ref(fleet_arn, website_ca_id)?,
        )?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Remove a certificate authority from a fleet.
    pub async fn disassociate_website_certificate_authority(
        &self,
        fleet_arn: &str,
        website_ca_id: &str,
    ) -> Result<(), WorkLinkError> {
        let op = command(
            "DisassociateWebsiteCertificateAuthority",
            &ca_ref(fleet_arn, website_ca_id)?,
        )?;

        Ok(self.client.invoke_empty(op).await?)
    }

    /// List certificate authorities of a fleet.
    pub async fn list_website_certificate_authorities(
        &self,
        request: ListRequest,
    ) -> Result<ListWebsiteCertificateAuthoritiesOutput, WorkLinkError> {
        require("FleetArn", request.fleet_arn.as_deref().unwrap_or_default())?;
        let op = command("ListWebsiteCertificateAuthorities", &request)?;

        Ok(self.client.invoke_json(op).await?)
    }
}

fn ca_ref<'a>(fleet_arn: &'a str, website_ca_id: &'a str) -> Result<CaRef<'a>, WorkLinkError> {
    require("FleetArn", fleet_arn)?;
    require("WebsiteCaId", website_ca_id)?;
    Ok(CaRef {
        fleet_arn,
        website_ca_id,
    })
}
