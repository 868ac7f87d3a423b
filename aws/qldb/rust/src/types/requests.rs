//! Request types for QLDB operations.
//!
//! Members bound to the URL path or query string are skipped when the body
//! is serialized.

use super::common::*;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Input for `CreateLedger`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLedgerRequest {
    /// Ledger name, unique per account and region.
    #[serde(rename = "Name")]
    pub name: String,
    /// Tags to attach.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Permissions mode.
    #[serde(rename = "PermissionsMode")]
    pub permissions_mode: PermissionsMode,
    /// Whether the ledger is protected from deletion (service default: true).
    #[serde(rename = "DeletionProtection", skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    /// KMS key for encryption at rest.
    #[serde(rename = "KmsKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
}

impl CreateLedgerRequest {
    /// Create a request with the required members.
    pub fn new(name: impl Into<String>, permissions_mode: PermissionsMode) -> Self {
        Self {
            name: name.into(),
            tags: None,
            permissions_mode,
            deletion_protection: None,
            kms_key: None,
        }
    }

    /// Add a tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set deletion protection.
    pub fn with_deletion_protection(mut self, enabled: bool) -> Self {
        self.deletion_protection = Some(enabled);
        self
    }

    /// Set the KMS key.
    pub fn with_kms_key(mut self, key: impl Into<String>) -> Self {
        self.kms_key = Some(key.into());
        self
    }
}

/// Input for `UpdateLedger`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLedgerRequest {
    /// Ledger name (path).
    #[serde(skip)]
    pub name: String,
    /// Deletion protection.
    #[serde(rename = "DeletionProtection", skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    /// KMS key for encryption at rest.
    #[serde(rename = "KmsKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
}

impl UpdateLedgerRequest {
    /// Create a request for a ledger.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set deletion protection.
    pub fn with_deletion_protection(mut self, enabled: bool) -> Self {
        self.deletion_protection = Some(enabled);
        self
    }

    /// Set the KMS key.
    pub fn with_kms_key(mut self, key: impl Into<String>) -> Self {
        self.kms_key = Some(key.into());
        self
    }
}

/// Pagination parameters for list operations, sent as `max_results` and
/// `next_token` query parameters.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    /// Page size.
    pub max_results: Option<i32>,
    /// Continuation token.
    pub next_token: Option<String>,
}

impl ListRequest {
    /// First page with the service default size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max: i32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Continue from a previous page.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

/// Input for `ExportJournalToS3`.
#[derive(Debug, Clone, Serialize)]
pub struct ExportJournalToS3Request {
    /// Ledger name (path).
    #[serde(skip)]
    pub name: String,
    /// Inclusive start of the exported range.
    #[serde(rename = "InclusiveStartTime", with = "aws_runtime::codec::epoch_seconds")]
    pub inclusive_start_time: DateTime<Utc>,
    /// Exclusive end of the exported range.
    #[serde(rename = "ExclusiveEndTime", with = "aws_runtime::codec::epoch_seconds")]
    pub exclusive_end_time: DateTime<Utc>,
    /// Destination.
    #[serde(rename = "S3ExportConfiguration")]
    pub s3_export_configuration: S3ExportConfiguration,
    /// Role QLDB assumes to write objects.
    #[serde(rename = "RoleArn")]
    pub role_arn: String,
    /// Output format (service default: `ION_TEXT`).
    #[serde(rename = "OutputFormat", skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

impl ExportJournalToS3Request {
    /// Create a request with the required members.
    pub fn new(
        name: impl Into<String>,
        inclusive_start_time: DateTime<Utc>,
        exclusive_end_time: DateTime<Utc>,
        s3_export_configuration: S3ExportConfiguration,
        role_arn: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            inclusive_start_time,
            exclusive_end_time,
            s3_export_configuration,
            role_arn: role_arn.into(),
            output_format: None,
        }
    }

    /// Set the output format.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }
}

/// Input for `StreamJournalToKinesis`.
#[derive(Debug, Clone, Serialize)]
pub struct StreamJournalToKinesisRequest {
    /// Ledger name (path).
    #[serde(skip)]
    pub ledger_name: String,
    /// Role QLDB assumes to write records.
    #[serde(rename = "RoleArn")]
    pub role_arn: String,
    /// Tags to attach to the stream.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Inclusive start of the streamed range.
    #[serde(rename = "InclusiveStartTime", with = "aws_runtime::codec::epoch_seconds")]
    pub inclusive_start_time: DateTime<Utc>,
    /// Exclusive end; streams indefinitely when absent.
    #[serde(
        rename = "ExclusiveEndTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclusive_end_time: Option<DateTime<Utc>>,
    /// Kinesis destination.
    #[serde(rename = "KinesisConfiguration")]
    pub kinesis_configuration: KinesisConfiguration,
    /// Name for the stream.
    #[serde(rename = "StreamName")]
    pub stream_name: String,
}

impl StreamJournalToKinesisRequest {
    /// Create a request with the required members.
    pub fn new(
        ledger_name: impl Into<String>,
        stream_name: impl Into<String>,
        role_arn: impl Into<String>,
        inclusive_start_time: DateTime<Utc>,
        kinesis_configuration: KinesisConfiguration,
    ) -> Self {
        Self {
            ledger_name: ledger_name.into(),
            role_arn: role_arn.into(),
            tags: None,
            inclusive_start_time,
            exclusive_end_time: None,
            kinesis_configuration,
            stream_name: stream_name.into(),
        }
    }

    /// Stop streaming at a point in time.
    pub fn with_exclusive_end_time(mut self, end: DateTime<Utc>) -> Self {
        self.exclusive_end_time = Some(end);
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Input for `GetBlock`.
#[derive(Debug, Clone, Serialize)]
pub struct GetBlockRequest {
    /// Ledger name (path).
    #[serde(skip)]
    pub name: String,
    /// Block location.
    #[serde(rename = "BlockAddress")]
    pub block_address: ValueHolder,
    /// Digest tip to build a proof against.
    #[serde(rename = "DigestTipAddress", skip_serializing_if = "Option::is_none")]
    pub digest_tip_address: Option<ValueHolder>,
}

impl GetBlockRequest {
    /// Create a request with the required members.
    pub fn new(name: impl Into<String>, block_address: ValueHolder) -> Self {
        Self {
            name: name.into(),
            block_address,
            digest_tip_address: None,
        }
    }

    /// Request a proof against a digest tip.
    pub fn with_digest_tip_address(mut self, address: ValueHolder) -> Self {
        self.digest_tip_address = Some(address);
        self
    }
}

/// Input for `GetRevision`.
#[derive(Debug, Clone, Serialize)]
pub struct GetRevisionRequest {
    /// Ledger name (path).
    #[serde(skip)]
    pub name: String,
    /// Block location of the revision.
    #[serde(rename = "BlockAddress")]
    pub block_address: ValueHolder,
    /// Document identifier.
    #[serde(rename = "DocumentId")]
    pub document_id: String,
    /// Digest tip to build a proof against.
    #[serde(rename = "DigestTipAddress", skip_serializing_if = "Option::is_none")]
    pub digest_tip_address: Option<ValueHolder>,
}

impl GetRevisionRequest {
    /// Create a request with the required members.
    pub fn new(
        name: impl Into<String>,
        block_address: ValueHolder,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            block_address,
            document_id: document_id.into(),
            digest_tip_address: None,
        }
    }

    /// Request a proof against a digest tip.
    pub fn with_digest_tip_address(mut self, address: ValueHolder) -> Self {
        self.digest_tip_address = Some(address);
        self
    }
}

/// Input for `TagResource`.
#[derive(Debug, Clone, Serialize)]
pub struct TagResourceRequest {
    /// Resource ARN (path).
    #[serde(skip)]
    pub resource_arn: String,
    /// Tags to add or overwrite.
    #[serde(rename = "Tags")]
    pub tags: HashMap<String, String>,
}

impl TagResourceRequest {
    /// Create a request.
    pub fn new(resource_arn: impl Into<String>, tags: HashMap<String, String>) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_path_members_not_in_body() {
        let request = UpdateLedgerRequest::new("books").with_deletion_protection(false);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "DeletionProtection": false }));
    }

    #[test]
    fn test_create_ledger_body() {
        let request = CreateLedgerRequest::new("books", PermissionsMode::Standard)
            .with_tag("team", "ledger");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Name": "books",
                "PermissionsMode": "STANDARD",
                "Tags": { "team": "ledger" }
            })
        );
    }

    #[test]
    fn test_export_body_timestamps() {
        let request = ExportJournalToS3Request::new(
            "books",
            Utc.timestamp_opt(1_600_000_000, 0).unwrap(),
            Utc.timestamp_opt(1_600_003_600, 0).unwrap(),
            S3ExportConfiguration {
                bucket: "exports".to_string(),
                prefix: "books/".to_string(),
                encryption_configuration: S3EncryptionConfiguration {
                    object_encryption_type: S3ObjectEncryptionType::SseS3,
                    kms_key_arn: None,
                },
            },
            "arn:aws:iam::1:role/export",
        )
        .with_output_format(OutputFormat::Json);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["InclusiveStartTime"], 1_600_000_000);
        assert_eq!(json["ExclusiveEndTime"], 1_600_003_600);
        assert_eq!(
            json["S3ExportConfiguration"]["EncryptionConfiguration"],
            serde_json::json!({ "ObjectEncryptionType": "SSE_S3" })
        );
        assert_eq!(json["OutputFormat"], "JSON");
    }
}
