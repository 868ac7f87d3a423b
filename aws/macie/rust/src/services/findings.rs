//! Findings.

use crate::error::MacieError;
use crate::types::*;
use aws_runtime::{AwsError, Method, OperationRequest, ServiceClient};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FindingIdsBody<'a, S: Serialize> {
    finding_ids: &'a [S],
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_criteria: Option<&'a SortCriteria>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SampleFindingsBody<'a> {
    #[serde(skip_serializing_if = "slice_is_empty")]
    finding_types: &'a [String],
}

/// Service for listing, reading and archiving findings.
pub struct FindingsService {
    client: Arc<ServiceClient>,
}

impl FindingsService {
    /// Create a new findings service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// List finding identifiers matching the criteria.
    pub async fn list_findings(
        &self,
        request: ListFindingsRequest,
    ) -> Result<ListFindingsOutput, MacieError> {
        let op = OperationRequest::rest("ListFindings", Method::Post, "/findings")
            .with_json_body(&request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Get the details of findings.
    pub async fn get_findings<S: Serialize>(
        &self,
        finding_ids: &[S],
        sort_criteria: Option<&SortCriteria>,
    ) -> Result<GetFindingsOutput, MacieError> {
        require_ids(finding_ids)?;
        let op = OperationRequest::rest("GetFindings", Method::Post, "/findings/describe")
            .with_json_body(&FindingIdsBody {
                finding_ids,
                sort_criteria,
            })?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Count findings grouped by an attribute.
    pub async fn get_finding_statistics(
        &self,
        request: GetFindingStatisticsRequest,
    ) -> Result<GetFindingStatisticsOutput, MacieError> {
        let op = OperationRequest::rest(
            "GetFindingStatistics",
            Method::Post,
            "/findings/statistics",
        )
        .with_json_body(&request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Archive findings.
    pub async fn archive_findings<S: Serialize>(
        &self,
        finding_ids: &[S],
    ) -> Result<(), MacieError> {
        require_ids(finding_ids)?;
        let op = OperationRequest::rest("ArchiveFindings", Method::Post, "/findings/archive")
            .with_json_body(&FindingIdsBody {
                finding_ids,
                sort_criteria: None,
            })?;

        self.client.invoke_empty(op).await?;
        info!(count = finding_ids.len(), "Archived findings");
        Ok(())
    }

    /// Restore archived findings.
    pub async fn unarchive_findings<S: Serialize>(
        &self,
        finding_ids: &[S],
    ) -> Result<(), MacieError> {
        require_ids(finding_ids)?;
        let op = OperationRequest::rest("UnarchiveFindings", Method::Post, "/findings/unarchive")
            .with_json_body(&FindingIdsBody {
                finding_ids,
                sort_criteria: None,
            })?;

        Ok(self.client.invoke_empty(op).await?)
    }

    /// Create sample findings, one per type, or one of every type when
    /// `finding_types` is empty.
    pub async fn create_sample_findings(&self, finding_types: &[String]) -> Result<(), MacieError> {
        let op = OperationRequest::rest("CreateSampleFindings", Method::Post, "/findings/sample")
            .with_json_body(&SampleFindingsBody { finding_types })?;

        Ok(self.client.invoke_empty(op).await?)
    }
}

fn slice_is_empty(types: &&[String]) -> bool {
    types.is_empty()
}

fn require_ids<S>(ids: &[S]) -> Result<(), AwsError> {
    if ids.is_empty() {
        return Err(AwsError::validation("findingIds must not be empty"));
    }
    Ok(())
}
