//! Connection operations.

use super::{require, rpc, ConnectionRef};
use crate::error::CodeStarConnectionsError;
use crate::types::*;
use aws_runtime::{AwsError, ServiceClient};
use std::sync::Arc;
use tracing::info;

/// Service for connections to repository providers.
pub struct ConnectionsService {
    client: Arc<ServiceClient>,
}

impl ConnectionsService {
    /// Create a new connections service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Create a connection. It stays `PENDING` until completed in the console.
    pub async fn create_connection(
        &self,
        request: CreateConnectionRequest,
    ) -> Result<CreateConnectionOutput, CodeStarConnectionsError> {
        require("ConnectionName", &request.connection_name)?;
        if request.provider_type.is_none() && request.host_arn.is_none() {
            return Err(AwsError::validation("either ProviderType or HostArn is required").into());
        }
        let op = rpc("CreateConnection", &request)?;

        let output: CreateConnectionOutput = self.client.invoke_json(op).await?;
        info!(
            connection = %request.connection_name,
            arn = ?output.connection_arn,
            "Created connection"
        );
        Ok(output)
    }

    /// Delete a connection.
    pub async fn delete_connection(
        &self,
        connection_arn: &str,
    ) -> Result<(), CodeStarConnectionsError> {
        require("ConnectionArn", connection_arn)?;
        let op = rpc("DeleteConnection", &ConnectionRef { connection_arn })?;

        self.client.invoke_empty(op).await?;
        info!(connection = %connection_arn, "Deleted connection");
        Ok(())
    }

    /// Get a connection.
    pub async fn get_connection(
        &self,
        connection_arn: &str,
    ) -> Result<GetConnectionOutput, CodeStarConnectionsError> {
        require("ConnectionArn", connection_arn)?;
        let op = rpc("GetConnection", &ConnectionRef { connection_arn })?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// List connections.
    pub async fn list_connections(
        &self,
        request: ListConnectionsRequest,
    ) -> Result<ListConnectionsOutput, CodeStarConnectionsError> {
        let op = rpc("ListConnections", &request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// List every connection matching the filters, following pagination.
    pub async fn list_all_connections(
        &self,
        request: ListConnectionsRequest,
    ) -> Result<Vec<Connection>, CodeStarConnectionsError> {
        let mut request = request;
        let mut connections = Vec::new();
        loop {
            let page = self.list_connections(request.clone()).await?;
            connections.extend(page.connections);
            match page.next_token {
                Some(token) if !token.is_empty() => request.next_token = Some(token),
                _ => return Ok(connections),
            }
        }
    }
}
