//! Journal streams to Kinesis Data Streams.

use super::with_pagination;
use crate::error::QldbError;
use crate::types::*;
use aws_runtime::{resolve_path, Method, OperationRequest, ServiceClient};
use std::sync::Arc;

/// Service for journal streams.
pub struct StreamsService {
    client: Arc<ServiceClient>,
}

impl StreamsService {
    /// Create a new streams service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Start streaming a ledger's journal to Kinesis.
    pub async fn stream_journal_to_kinesis(
        &self,
        request: StreamJournalToKinesisRequest,
    ) -> Result<StreamJournalToKinesisOutput, QldbError> {
        let path = resolve_path(
            "/ledgers/{name}/journal-kinesis-streams",
            &[("name", request.ledger_name.as_str())],
        )?;
        let op = OperationRequest::rest("StreamJournalToKinesis", Method::Post, path)
            .with_json_body(&request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Describe a journal stream.
    pub async fn describe_journal_kinesis_stream(
        &self,
        ledger_name: &str,
        stream_id: &str,
    ) -> Result<DescribeJournalKinesisStreamOutput, QldbError> {
        let path = resolve_path(
            "/ledgers/{name}/journal-kinesis-streams/{streamId}",
            &[("name", ledger_name), ("streamId", stream_id)],
        )?;
        let op = OperationRequest::rest("DescribeJournalKinesisStream", Method::Get, path);

        Ok(self.client.invoke_json(op).await?)
    }

    /// Cancel a journal stream.
    pub async fn cancel_journal_kinesis_stream(
        &self,
        ledger_name: &str,
        stream_id: &str,
    ) -> Result<CancelJournalKinesisStreamOutput, QldbError> {
        let path = resolve_path(
            "/ledgers/{name}/journal-kinesis-streams/{streamId}",
            &[("name", ledger_name), ("streamId", stream_id)],
        )?;
        let op = OperationRequest::rest("CancelJournalKinesisStream", Method::Delete, path);

        Ok(self.client.invoke_json(op).await?)
    }

    /// List journal streams of a ledger.
    pub async fn list_journal_kinesis_streams_for_ledger(
        &self,
        ledger_name: &str,
        request: ListRequest,
    ) -> Result<ListJournalKinesisStreamsForLedgerOutput, QldbError> {
        let path = resolve_path(
            "/ledgers/{name}/journal-kinesis-streams",
            &[("name", ledger_name)],
        )?;
        let op = with_pagination(
            OperationRequest::rest("ListJournalKinesisStreamsForLedger", Method::Get, path),
            &request,
        );

        Ok(self.client.invoke_json(op).await?)
    }
}
