//! S3 bucket inventory.

use crate::error::MacieError;
use crate::types::*;
use aws_runtime::{Method, OperationRequest, ServiceClient};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BucketStatisticsBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<&'a str>,
}

/// Service for the S3 bucket inventory Macie maintains.
pub struct BucketsService {
    client: Arc<ServiceClient>,
}

impl BucketsService {
    /// Create a new buckets service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Describe monitored buckets.
    pub async fn describe_buckets(
        &self,
        request: DescribeBucketsRequest,
    ) -> Result<DescribeBucketsOutput, MacieError> {
        let op = OperationRequest::rest("DescribeBuckets", Method::Post, "/datasources/s3")
            .with_json_body(&request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Aggregate bucket statistics, optionally for one account.
    pub async fn get_bucket_statistics(
        &self,
        account_id: Option<&str>,
    ) -> Result<GetBucketStatisticsOutput, MacieError> {
        let op = OperationRequest::rest(
            "GetBucketStatistics",
            Method::Post,
            "/datasources/s3/statistics",
        )
        .with_json_body(&BucketStatisticsBody { account_id })?;
        Ok(self.client.invoke_json(op).await?)
    }
}
