//! Macie session and classification result export.

use super::ensure_client_token;
use crate::error::MacieError;
use crate::types::*;
use aws_runtime::{resolve_path, Method, OperationRequest, ServiceClient};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusBody {
    status: MacieStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportConfigurationBody<'a> {
    configuration: &'a ClassificationExportConfiguration,
}

/// Service for enabling, suspending and configuring Macie for an account.
pub struct SessionService {
    client: Arc<ServiceClient>,
}

impl SessionService {
    /// Create a new session service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Enable Macie for the calling account.
    pub async fn enable_macie(&self, mut request: EnableMacieRequest) -> Result<(), MacieError> {
        ensure_client_token(&mut request.client_token);
        let op = OperationRequest::rest("EnableMacie", Method::Post, "/macie")
            .with_json_body(&request)?;

        self.client.invoke_empty(op).await?;
        info!("Enabled Macie");
        Ok(())
    }

    /// Disable Macie and delete its resources for the calling account.
    pub async fn disable_macie(&self) -> Result<(), MacieError> {
        let op = OperationRequest::rest("DisableMacie", Method::Delete, "/macie");

        self.client.invoke_empty(op).await?;
        info!("Disabled Macie");
        Ok(())
    }

    /// Get the status and configuration of Macie for the calling account.
    pub async fn get_macie_session(&self) -> Result<GetMacieSessionOutput, MacieError> {
        let op = OperationRequest::rest("GetMacieSession", Method::Get, "/macie");
        Ok(self.client.invoke_json(op).await?)
    }

    /// Suspend or resume Macie, or change the publication frequency.
    pub async fn update_macie_session(
        &self,
        request: UpdateMacieSessionRequest,
    ) -> Result<(), MacieError> {
        let op = OperationRequest::rest("UpdateMacieSession", Method::Patch, "/macie")
            .with_json_body(&request)?;

        Ok(self.client.invoke_empty(op).await?)
    }

    /// Suspend or resume Macie for a member account (administrator only).
    pub async fn update_member_session(
        &self,
        account_id: &str,
        status: MacieStatus,
    ) -> Result<(), MacieError> {
        let path = resolve_path("/macie/members/{id}", &[("id", account_id)])?;
        let op = OperationRequest::rest("UpdateMemberSession", Method::Patch, path)
            .with_json_body(&StatusBody { status })?;

        Ok(self.client.invoke_empty(op).await?)
    }

    /// Get where sensitive data discovery results are stored.
    pub async fn get_classification_export_configuration(
        &self,
    ) -> Result<ClassificationExportConfigurationOutput, MacieError> {
        let op = OperationRequest::rest(
            "GetClassificationExportConfiguration",
            Method::Get,
            "/classification-export-configuration",
        );
        Ok(self.client.invoke_json(op).await?)
    }

    /// Set where sensitive data discovery results are stored.
    pub async fn put_classification_export_configuration(
        &self,
        configuration: &ClassificationExportConfiguration,
    ) -> Result<ClassificationExportConfigurationOutput, MacieError> {
        let op = OperationRequest::rest(
            "PutClassificationExportConfiguration",
            Method::Put,
            "/classification-export-configuration",
        )
        .with_json_body(&ExportConfigurationBody { configuration })?;

        Ok(self.client.invoke_json(op).await?)
    }
}
