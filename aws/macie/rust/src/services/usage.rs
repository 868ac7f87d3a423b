//! Usage and estimated costs.

use crate::error::MacieError;
use crate::types::*;
use aws_runtime::{Method, OperationRequest, ServiceClient};
use std::sync::Arc;

/// Service for Macie usage statistics.
pub struct UsageService {
    client: Arc<ServiceClient>,
}

impl UsageService {
    /// Create a new usage service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Usage and quotas per account.
    pub async fn get_usage_statistics(
        &self,
        request: GetUsageStatisticsRequest,
    ) -> Result<GetUsageStatisticsOutput, MacieError> {
        let op = OperationRequest::rest("GetUsageStatistics", Method::Post, "/usage/statistics")
            .with_json_body(&request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Aggregated usage for the current month.
    pub async fn get_usage_totals(&self) -> Result<GetUsageTotalsOutput, MacieError> {
        let op = OperationRequest::rest("GetUsageTotals", Method::Get, "/usage");
        Ok(self.client.invoke_json(op).await?)
    }
}
