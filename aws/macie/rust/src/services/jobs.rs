//! Classification jobs.

use super::ensure_client_token;
use crate::error::MacieError;
use crate::types::*;
use aws_runtime::{resolve_path, AwsError, Method, OperationRequest, ServiceClient};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JobStatusBody {
    job_status: JobStatus,
}

/// Service for sensitive data discovery jobs.
pub struct ClassificationJobsService {
    client: Arc<ServiceClient>,
}

impl ClassificationJobsService {
    /// Create a new classification jobs service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Create and start a classification job.
    pub async fn create_classification_job(
        &self,
        mut request: CreateClassificationJobRequest,
    ) -> Result<CreateClassificationJobOutput, MacieError> {
        if request.s3_job_definition.bucket_definitions.is_empty() {
            return Err(AwsError::validation("s3JobDefinition.bucketDefinitions must not be empty").into());
        }
        if let Some(percentage) = request.sampling_percentage {
            if !(1..=100).contains(&percentage) {
                return Err(AwsError::validation(format!(
                    "samplingPercentage must be between 1 and 100, got {}",
                    percentage
                ))
                .into());
            }
        }
        if request.job_type == JobType::Scheduled && request.schedule_frequency.is_none() {
            return Err(AwsError::validation("scheduled jobs require scheduleFrequency").into());
        }
        ensure_client_token(&mut request.client_token);

        let op = OperationRequest::rest("CreateClassificationJob", Method::Post, "/jobs")
            .with_json_body(&request)?;

        let output: CreateClassificationJobOutput = self.client.invoke_json(op).await?;
        info!(job = %request.name, id = ?output.job_id, "Created classification job");
        Ok(output)
    }

    /// List classification jobs.
    pub async fn list_classification_jobs(
        &self,
        request: ListClassificationJobsRequest,
    ) -> Result<ListClassificationJobsOutput, MacieError> {
        let op = OperationRequest::rest("ListClassificationJobs", Method::Post, "/jobs/list")
            .with_json_body(&request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Describe a classification job.
    pub async fn describe_classification_job(
        &self,
        job_id: &str,
    ) -> Result<DescribeClassificationJobOutput, MacieError> {
        let path = resolve_path("/jobs/{jobId}", &[("jobId", job_id)])?;
        let op = OperationRequest::rest("DescribeClassificationJob", Method::Get, path);
        Ok(self.client.invoke_json(op).await?)
    }

    /// Pause, resume or cancel a job.
    pub async fn update_classification_job(
        &self,
        job_id: &str,
        job_status: JobStatus,
    ) -> Result<(), MacieError> {
        let path = resolve_path("/jobs/{jobId}", &[("jobId", job_id)])?;
        let op = OperationRequest::rest("UpdateClassificationJob", Method::Patch, path)
            .with_json_body(&JobStatusBody { job_status })?;

        self.client.invoke_empty(op).await?;
        info!(job = %job_id, status = ?job_status, "Updated classification job");
        Ok(())
    }
}
