//! Host operations.

use super::{require, rpc, HostRef};
use crate::error::CodeStarConnectionsError;
use crate::types::*;
use aws_runtime::ServiceClient;
use std::sync::Arc;
use tracing::info;

/// Service for hosts, the endpoints of installed providers such as GitHub
/// Enterprise Server.
pub struct HostsService {
    client: Arc<ServiceClient>,
}

impl HostsService {
    /// Create a new hosts service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Create a host.
    pub async fn create_host(
        &self,
        request: CreateHostRequest,
    ) -> Result<CreateHostOutput, CodeStarConnectionsError> {
        require("Name", &request.name)?;
        require("ProviderEndpoint", &request.provider_endpoint)?;
        let op = rpc("CreateHost", &request)?;

        let output: CreateHostOutput = self.client.invoke_json(op).await?;
        info!(host = %request.name, arn = ?output.host_arn, "Created host");
        Ok(output)
    }

    /// Delete a host. It must have no connections.
    pub async fn delete_host(&self, host_arn: &str) -> Result<(), CodeStarConnectionsError> {
        require("HostArn", host_arn)?;
        let op = rpc("DeleteHost", &HostRef { host_arn })?;

        self.client.invoke_empty(op).await?;
        info!(host = %host_arn, "Deleted host");
        Ok(())
    }

    /// Get a host.
    pub async fn get_host(&self, host_arn: &str) -> Result<GetHostOutput, CodeStarConnectionsError> {
        require("HostArn", host_arn)?;
        let op = rpc("GetHost", &HostRef { host_arn })?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// List hosts.
    pub async fn list_hosts(
        &self,
        request: ListHostsRequest,
    ) -> Result<ListHostsOutput, CodeStarConnectionsError> {
        let op = rpc("ListHosts", &request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Change the endpoint or VPC settings of a host.
    pub async fn update_host(&self, request: UpdateHostRequest) -> Result<(), CodeStarConnectionsError> {
        require("HostArn", &request.host_arn)?;
        let op = rpc("UpdateHost", &request)?;

        Ok(self.client.invoke_empty(op).await?)
    }
}
