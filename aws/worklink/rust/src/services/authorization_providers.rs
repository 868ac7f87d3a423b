//! Website authorization providers.

use super::{command, require};
use crate::error::WorkLinkError;
use crate::types::*;
use aws_runtime::ServiceClient;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct ProviderRef<'a> {
    #[serde(rename = "FleetArn")]
    fleet_arn: &'a str,
    #[serde(rename = "AuthorizationProviderId")]
    authorization_provider_id: &'a str,
}

/// Service for the providers that authorize users on associated websites.
pub struct AuthorizationProvidersService {
    client: Arc<ServiceClient>,
}

impl AuthorizationProvidersService {
    /// Create a new authorization providers service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Associate an authorization provider with a fleet.
    pub async fn associate_website_authorization_provider(
        &self,
        request: AssociateWebsiteAuthorizationProviderRequest,
    ) -> Result<AssociateWebsiteAuthorizationProviderOutput, WorkLinkError> {
        require("FleetArn", &request.fleet_arn)?;
        let op = command("AssociateWebsiteAuthorizationProvider", &request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Disassociate an authorization provider.
    pub async fn disassociate_website_authorization_provider(
        &self,
        fleet_arn: &str,
        authorization_provider_id: &str,
    ) -> Result<(), WorkLinkError> {
        require("FleetArn", fleet_arn)?;
        require("AuthorizationProviderId", authorization_provider_id)?;
        let op = command(
            "DisassociateWebsiteAuthorizationProvider",
            &ProviderRef {
                fleet_arn,
                authorization_provider_id,
            },
        )?;

        Ok(self.client.invoke_empty(op).await?)
    }

    /// List authorization providers of a fleet.
    pub async fn list_website_authorization_providers(
        &self,
        request: ListRequest,
    ) -> Result<ListWebsiteAuthorizationProvidersOutput, WorkLinkError> {
        require("FleetArn", request.fleet_arn.as_deref().unwrap_or_default())?;
        let op = command("ListWebsiteAuthorizationProviders", &request)?;

        Ok(self.client.invoke_json(op).await?)
    }
}
