//! Fleet lifecycle operations.

use super::{command, require, FleetRef};
use crate::error::WorkLinkError;
use crate::types::*;
use aws_runtime::ServiceClient;
use std::sync::Arc;
use tracing::info;

/// Service for creating, describing, updating and deleting fleets.
pub struct FleetsService {
    client: Arc<ServiceClient>,
}

impl FleetsService {
    /// Create a new fleets service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Create a fleet.
    pub async fn create_fleet(
        &self,
        request: CreateFleetRequest,
    ) -> Result<CreateFleetOutput, WorkLinkError> {
        require("FleetName", &request.fleet_name)?;
        let op = command("CreateFleet", &request)?;

        let output: CreateFleetOutput = self.client.invoke_json(op).await?;
        info!(fleet = %request.fleet_name, arn = ?output.fleet_arn, "Created fleet");
        Ok(output)
    }

    /// Delete a fleet. Users can no longer reach its websites.
    pub async fn delete_fleet(&self, fleet_arn: &str) -> Result<(), WorkLinkError> {
        require("FleetArn", fleet_arn)?;
        let op = command("DeleteFleet", &FleetRef { fleet_arn })?;

        self.client.invoke_empty(op).await?;
        info!(fleet = %fleet_arn, "Deleted fleet");
        Ok(())
    }

    /// Describe a fleet.
    pub async fn describe_fleet_metadata(
        &self,
        fleet_arn: &str,
    ) -> Result<DescribeFleetMetadataOutput, WorkLinkError> {
        require("FleetArn", fleet_arn)?;
        let op = command("DescribeFleetMetadata", &FleetRef { fleet_arn })?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// List fleets in the account and region.
    pub async fn list_fleets(&self, request: ListRequest) -> Result<ListFleetsOutput, WorkLinkError> {
        let request = ListRequest {
            fleet_arn: None,
            ..request
        };
        let op = command("ListFleets", &request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// List every fleet, following pagination.
    pub async fn list_all_fleets(&self) -> Result<Vec<FleetSummary>, WorkLinkError> {
        let mut request = ListRequest::new();
        let mut fleets = Vec::new();
        loop {
            let page = self.list_fleets(request.clone()).await?;
            fleets.extend(page.fleet_summary_list);
            match page.next_token {
                Some(token) if !token.is_empty() => request.next_token = Some(token),
                _ => return Ok(fleets),
            }
        }
    }

    /// Update the display name or routing optimization of a fleet.
    pub async fn update_fleet_metadata(
        &self,
        request: UpdateFleetMetadataRequest,
    ) -> Result<(), WorkLinkError> {
        require("FleetArn", &request.fleet_arn)?;
        let op = command("UpdateFleetMetadata", &request)?;

        Ok(self.client.invoke_empty(op).await?)
    }
}
