//! Website domain association and access.

use super::{command, require, DomainRef};
use crate::error::WorkLinkError;
use crate::types::*;
use aws_runtime::ServiceClient;
use std::sync::Arc;
use tracing::{info, warn};

/// Service for the internal websites a fleet exposes.
pub struct DomainsService {
    client: Arc<ServiceClient>,
}

impl DomainsService {
    /// Create a new domains service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Associate a domain with a fleet.
    pub async fn associate_domain(&self, request: AssociateDomainRequest) -> Result<(), WorkLinkError> {
        require("FleetArn", &request.fleet_arn)?;
        require("DomainName", &request.domain_name)?;
        let op = command("AssociateDomain", &request)?;

        self.client.invoke_empty(op).await?;
        info!(fleet = %request.fleet_arn, domain = %request.domain_name, "Associated domain");
        Ok(())
    }

    /// Describe a domain.
    pub async fn describe_domain(
        &self,
        fleet_arn: &str,
        domain_name: &str,
    ) -> Result<DescribeDomainOutput, WorkLinkError> {
        let op = command("DescribeDomain", &domain_ref(fleet_arn, domain_name)?)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Disassociate a domain; users lose access to it.
    pub async fn disassociate_domain(
        &self,
        fleet_arn: &str,
        domain_name: &str,
    ) -> Result<(), WorkLinkError> {
        let op = command("DisassociateDomain", &domain_ref(fleet_arn, domain_name)?)?;

        self.client.invoke_empty(op).await?;
        info!(fleet = %fleet_arn, domain = %domain_name, "Disassociated domain");
        Ok(())
    }

    /// List domains of a fleet.
    pub async fn list_domains(&self, request: ListRequest) -> Result<ListDomainsOutput, WorkLinkError> {
        require("FleetArn", request.fleet_arn.as_deref().unwrap_or_default())?;
        let op = command("ListDomains", &request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Restore access to a domain that was revoked.
    pub async fn restore_domain_access(
        &self,
        fleet_arn: &str,
        domain_name: &str,
    ) -> Result<(), WorkLinkError> {
        let op = command("RestoreDomainAccess", &domain_ref(fleet_arn, domain_name)?)?;

        self.client.invoke_empty(op).await?;
        info!(fleet = %fleet_arn, domain = %domain_name, "Restored domain access");
        Ok(())
    }

    /// Revoke access to a domain without disassociating it.
    pub async fn revoke_domain_access(
        &self,
        fleet_arn: &str,
        domain_name: &str,
    ) -> Result<(), WorkLinkError> {
        let op = command("RevokeDomainAccess", &domain_ref(fleet_arn, domain_name)?)?;

        self.client.invoke_empty(op).await?;
        warn!(fleet = %fleet_arn, domain = %domain_name, "Revoked domain access");
        Ok(())
    }

    /// Update the display name of a domain.
    pub async fn update_domain_metadata(
        &self,
        request: UpdateDomainMetadataRequest,
    ) -> Result<(), WorkLinkError> {
        require("FleetArn", &request.fleet_arn)?;
        require("DomainName", &request.domain_name)?;
        let op = command("UpdateDomainMetadata", &request)?;

        Ok(self.client.invoke_empty(op).await?)
    }
}

fn domain_ref<'a>(fleet_arn: &'a str, domain_name: &'a str) -> Result<DomainRef<'a>, WorkLinkError> {
    require("FleetArn", fleet_arn)?;
    require("DomainName", domain_name)?;
    Ok(DomainRef {
        fleet_arn,
        domain_name,
    })
}
