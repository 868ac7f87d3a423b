//! Fleet configuration: audit stream, company network, device policy and
//! identity provider.

use super::{command, require, FleetRef};
use crate::error::WorkLinkError;
use crate::types::*;
use aws_runtime::ServiceClient;
use std::sync::Arc;
use tracing::info;

/// Service for the per-fleet configuration documents.
pub struct ConfigurationService {
    client: Arc<ServiceClient>,
}

impl ConfigurationService {
    /// Create a new configuration service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Describe the audit stream of a fleet.
    pub async fn describe_audit_stream_configuration(
        &self,
        fleet_arn: &str,
    ) -> Result<DescribeAuditStreamConfigurationOutput, WorkLinkError> {
        require("FleetArn", fleet_arn)?;
        let op = command("DescribeAuditStreamConfiguration", &FleetRef { fleet_arn })?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Set or clear the audit stream of a fleet.
    pub async fn update_audit_stream_configuration(
        &self,
        request: UpdateAuditStreamConfigurationRequest,
    ) -> Result<(), WorkLinkError> {
        require("FleetArn", &request.fleet_arn)?;
        let op = command("UpdateAuditStreamConfiguration", &request)?;

        Ok(self.client.invoke_empty(op).await?)
    }

    /// Describe the networking of a fleet.
    pub async fn describe_company_network_configuration(
        &self,
        fleet_arn: &str,
    ) -> Result<DescribeCompanyNetworkConfigurationOutput, WorkLinkError> {
        require("FleetArn", fleet_arn)?;
        let op = command("DescribeCompanyNetworkConfiguration", &FleetRef { fleet_arn })?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Update the networking of a fleet.
    pub async fn update_company_network_configuration(
        &self,
        request: UpdateCompanyNetworkConfigurationRequest,
    ) -> Result<(), WorkLinkError> {
        require("FleetArn", &request.fleet_arn)?;
        require("VpcId", &request.vpc_id)?;
        if request.subnet_ids.is_empty() {
            return Err(aws_runtime::AwsError::validation("SubnetIds must not be empty").into());
        }
        let op = command("UpdateCompanyNetworkConfiguration", &request)?;

        self.client.invoke_empty(op).await?;
        info!(fleet = %request.fleet_arn, vpc = %request.vpc_id, "Updated company network");
        Ok(())
    }

    /// Describe the device policy of a fleet.
    pub async fn describe_device_policy_configuration(
        &self,
        fleet_arn: &str,
    ) -> Result<DescribeDevicePolicyConfigurationOutput, WorkLinkError> {
        require("FleetArn", fleet_arn)?;
        let op = command("DescribeDevicePolicyConfiguration", &FleetRef { fleet_arn })?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Set or clear the device CA certificate of a fleet.
    pub async fn update_device_policy_configuration(
        &self,
        request: UpdateDevicePolicyConfigurationRequest,
    ) -> Result<(), WorkLinkError> {
        require("FleetArn", &request.fleet_arn)?;
        let op = command("UpdateDevicePolicyConfiguration", &request)?;

        Ok(self.client.invoke_empty(op).await?)
    }

    /// Describe the identity provider of a fleet.
    pub async fn describe_identity_provider_configuration(
        &self,
        fleet_arn: &str,
    ) -> Result<DescribeIdentityProviderConfigurationOutput, WorkLinkError> {
        require("FleetArn", fleet_arn)?;
        let op = command("DescribeIdentityProviderConfiguration", &FleetRef { fleet_arn })?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Update the identity provider of a fleet.
    pub async fn update_identity_provider_configuration(
        &self,
        request: UpdateIdentityProviderConfigurationRequest,
    ) -> Result<(), WorkLinkError> {
        require("FleetArn", &request.fleet_arn)?;
        let op = command("UpdateIdentityProviderConfiguration", &request)?;

        Ok(self.client.invoke_empty(op).await?)
    }
}
