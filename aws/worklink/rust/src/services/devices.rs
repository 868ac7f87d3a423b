//! User devices.

use super::{command, require};
use crate::error::WorkLinkError;
use crate::types::*;
use aws_runtime::ServiceClient;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
struct DeviceRef<'a> {
    #[serde(rename = "FleetArn")]
    fleet_arn: &'a str,
    #[serde(rename = "DeviceId")]
    device_id: &'a str,
}

#[derive(Serialize)]
struct UserRef<'a> {
    #[serde(rename = "FleetArn")]
    fleet_arn: &'a str,
    #[serde(rename = "Username")]
    username: &'a str,
}

/// Service for devices registered with a fleet and their users.
pub struct DevicesService {
    client: Arc<ServiceClient>,
}

impl DevicesService {
    /// Create a new devices service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Describe a device.
    pub async fn describe_device(
        &self,
        fleet_arn: &str,
        device_id: &str,
    ) -> Result<DescribeDeviceOutput, WorkLinkError> {
        require("FleetArn", fleet_arn)?;
        require("DeviceId", device_id)?;
        let op = command(
            "DescribeDevice",
            &DeviceRef {
                fleet_arn,
                device_id,
            },
        )?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// List devices of a fleet.
    pub async fn list_devices(&self, request: ListRequest) -> Result<ListDevicesOutput, WorkLinkError> {
        require("FleetArn", request.fleet_arn.as_deref().unwrap_or_default())?;
        let op = command("ListDevices", &request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Sign a user out of every device.
    pub async fn sign_out_user(&self, fleet_arn: &str, username: &str) -> Result<(), WorkLinkError> {
        require("FleetArn", fleet_arn)?;
        require("Username", username)?;
        let op = command("SignOutUser", &UserRef { fleet_arn, username })?;

        self.client.invoke_empty(op).await?;
        info!(fleet = %fleet_arn, user = %username, "Signed out user");
        Ok(())
    }
}
