//! AWS Organizations integration.

use super::{ensure_client_token, with_pagination};
use crate::error::MacieError;
use crate::types::*;
use aws_runtime::{AwsError, Method, OperationRequest, ServiceClient};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnableAdminBody<'a> {
    admin_account_id: &'a str,
    client_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AutoEnableBody {
    auto_enable: bool,
}

/// Service for the delegated Macie administrator of an organization.
pub struct OrganizationService {
    client: Arc<ServiceClient>,
}

impl OrganizationService {
    /// Create a new organization service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Designate an account as the delegated Macie administrator.
    pub async fn enable_organization_admin_account(
        &self,
        admin_account_id: &str,
        client_token: Option<String>,
    ) -> Result<(), MacieError> {
        require_account(admin_account_id)?;
        let mut client_token = client_token;
        ensure_client_token(&mut client_token);

        let op = OperationRequest::rest("EnableOrganizationAdminAccount", Method::Post, "/admin")
            .with_json_body(&EnableAdminBody {
                admin_account_id,
                client_token: client_token.unwrap_or_default(),
            })?;

        self.client.invoke_empty(op).await?;
        info!(account = %admin_account_id, "Enabled organization administrator");
        Ok(())
    }

    /// Remove the delegated Macie administrator.
    pub async fn disable_organization_admin_account(
        &self,
        admin_account_id: &str,
    ) -> Result<(), MacieError> {
        require_account(admin_account_id)?;
        let op = OperationRequest::rest("DisableOrganizationAdminAccount", Method::Delete, "/admin")
            .with_query("adminAccountId", admin_account_id);

        self.client.invoke_empty(op).await?;
        info!(account = %admin_account_id, "Disabled organization administrator");
        Ok(())
    }

    /// List delegated administrators.
    pub async fn list_organization_admin_accounts(
        &self,
        request: ListRequest,
    ) -> Result<ListOrganizationAdminAccountsOutput, MacieError> {
        let op = with_pagination(
            OperationRequest::rest("ListOrganizationAdminAccounts", Method::Get, "/admin"),
            &request,
        );
        Ok(self.client.invoke_json(op).await?)
    }

    /// Describe the organization configuration.
    pub async fn describe_organization_configuration(
        &self,
    ) -> Result<DescribeOrganizationConfigurationOutput, MacieError> {
        let op = OperationRequest::rest(
            "DescribeOrganizationConfiguration",
            Method::Get,
            "/admin/configuration",
        );
        Ok(self.client.invoke_json(op).await?)
    }

    /// Set whether new organization accounts get Macie automatically.
    pub async fn update_organization_configuration(&self, auto_enable: bool) -> Result<(), MacieError> {
        let op = OperationRequest::rest(
            "UpdateOrganizationConfiguration",
            Method::Patch,
            "/admin/configuration",
        )
        .with_json_body(&AutoEnableBody { auto_enable })?;
        Ok(self.client.invoke_empty(op).await?)
    }
}

fn require_account(account_id: &str) -> Result<(), AwsError> {
    if account_id.is_empty() {
        return Err(AwsError::validation("adminAccountId must not be empty"));
    }
    Ok(())
}
