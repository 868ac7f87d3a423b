//! Journal exports to S3.

use super::with_pagination;
use crate::error::QldbError;
use crate::types::*;
use aws_runtime::{resolve_path, Method, OperationRequest, ServiceClient};
use std::sync::Arc;

/// Service for journal exports to S3.
pub struct ExportsService {
    client: Arc<ServiceClient>,
}

impl ExportsService {
    /// Create a new exports service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Start exporting a journal range to S3.
    pub async fn export_journal_to_s3(
        &self,
        request: ExportJournalToS3Request,
    ) -> Result<ExportJournalToS3Output, QldbError> {
        let path = resolve_path(
            "/ledgers/{name}/journal-s3-exports",
            &[("name", request.name.as_str())],
        )?;
        let op = OperationRequest::rest("ExportJournalToS3", Method::Post, path)
            .with_json_body(&request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Describe an export job.
    pub async fn describe_journal_s3_export(
        &self,
        name: &str,
        export_id: &str,
    ) -> Result<DescribeJournalS3ExportOutput, QldbError> {
        let path = resolve_path(
            "/ledgers/{name}/journal-s3-exports/{exportId}",
            &[("name", name), ("exportId", export_id)],
        )?;
        let op = OperationRequest::rest("DescribeJournalS3Export", Method::Get, path);

        Ok(self.client.invoke_json(op).await?)
    }

    /// List export jobs for all ledgers.
    pub async fn list_journal_s3_exports(
        &self,
        request: ListRequest,
    ) -> Result<ListJournalS3ExportsOutput, QldbError> {
        let op = with_pagination(
            OperationRequest::rest("ListJournalS3Exports", Method::Get, "/journal-s3-exports"),
            &request,
        );

        Ok(self.client.invoke_json(op).await?)
    }

    /// List export jobs for one ledger.
    pub async fn list_journal_s3_exports_for_ledger(
        &self,
        name: &str,
        request: ListRequest,
    ) -> Result<ListJournalS3ExportsOutput, QldbError> {
        let path = resolve_path("/ledgers/{name}/journal-s3-exports", &[("name", name)])?;
        let op = with_pagination(
            OperationRequest::rest("ListJournalS3ExportsForLedger", Method::Get, path),
            &request,
        );

        Ok(self.client.invoke_json(op).await?)
    }
}
