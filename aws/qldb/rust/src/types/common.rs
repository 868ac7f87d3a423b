//! Shared QLDB types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerState {
    /// Being created.
    Creating,
    /// Ready for use.
    Active,
    /// Being deleted.
    Deleting,
    /// Deleted.
    Deleted,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Permissions mode of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionsMode {
    /// Legacy mode: any principal with API access can run any PartiQL command.
    AllowAll,
    /// Table-level and command-level IAM permissions.
    Standard,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Status of ledger encryption at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncryptionStatus {
    /// Encryption is fully enabled.
    Enabled,
    /// A key change is being processed.
    Updating,
    /// The customer managed key is not accessible.
    KmsKeyInaccessible,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Encryption at rest settings of a ledger.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EncryptionDescription {
    /// ARN of the KMS key, or `AWS_OWNED_KMS_KEY`.
    #[serde(rename = "KmsKeyArn", default)]
    pub kms_key_arn: Option<String>,
    /// Current status.
    #[serde(rename = "EncryptionStatus", default)]
    pub encryption_status: Option<EncryptionStatus>,
    /// When the key became inaccessible.
    #[serde(
        rename = "InaccessibleKmsKeyDateTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub inaccessible_kms_key_date_time: Option<DateTime<Utc>>,
}

/// Ledger entry in `ListLedgers`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LedgerSummary {
    /// Ledger name.
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Ledger state.
    #[serde(rename = "State", default)]
    pub state: Option<LedgerState>,
    /// Creation time.
    #[serde(
        rename = "CreationDateTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub creation_date_time: Option<DateTime<Utc>>,
}

/// Server-side encryption applied to exported objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum S3ObjectEncryptionType {
    /// SSE with a KMS key.
    SseKms,
    /// SSE with S3 managed keys.
    SseS3,
    /// No server-side encryption.
    NoEncryption,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Encryption settings for an S3 export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3EncryptionConfiguration {
    /// Encryption type.
    #[serde(rename = "ObjectEncryptionType")]
    pub object_encryption_type: S3ObjectEncryptionType,
    /// KMS key for `SSE_KMS`.
    #[serde(rename = "KmsKeyArn", default, skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
}

/// Destination of a journal export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3ExportConfiguration {
    /// Bucket name.
    #[serde(rename = "Bucket")]
    pub bucket: String,
    /// Key prefix.
    #[serde(rename = "Prefix")]
    pub prefix: String,
    /// Object encryption.
    #[serde(rename = "EncryptionConfiguration")]
    pub encryption_configuration: S3EncryptionConfiguration,
}

/// Export job status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportStatus {
    /// Running.
    InProgress,
    /// Finished.
    Completed,
    /// Cancelled.
    Cancelled,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Format of exported journal data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputFormat {
    /// Binary Amazon Ion.
    IonBinary,
    /// Text Amazon Ion.
    IonText,
    /// JSON lines.
    Json,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Journal export job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JournalS3ExportDescription {
    /// Ledger name.
    #[serde(rename = "LedgerName")]
    pub ledger_name: String,
    /// Export identifier.
    #[serde(rename = "ExportId")]
    pub export_id: String,
    /// When the export was requested.
    #[serde(
        rename = "ExportCreationTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub export_creation_time: Option<DateTime<Utc>>,
    /// Job status.
    #[serde(rename = "Status", default)]
    pub status: Option<ExportStatus>,
    /// Inclusive start of the exported range.
    #[serde(
        rename = "InclusiveStartTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub inclusive_start_time: Option<DateTime<Utc>>,
    /// Exclusive end of the exported range.
    #[serde(
        rename = "ExclusiveEndTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub exclusive_end_time: Option<DateTime<Utc>>,
    /// Destination.
    #[serde(rename = "S3ExportConfiguration", default)]
    pub s3_export_configuration: Option<S3ExportConfiguration>,
    /// Role used to write the export.
    #[serde(rename = "RoleArn", default)]
    pub role_arn: Option<String>,
    /// Output format.
    #[serde(rename = "OutputFormat", default)]
    pub output_format: Option<OutputFormat>,
}

/// Kinesis destination of a journal stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinesisConfiguration {
    /// Kinesis data stream ARN.
    #[serde(rename = "StreamArn")]
    pub stream_arn: String,
    /// Whether records are aggregated with KPL aggregation.
    #[serde(
        rename = "AggregationEnabled",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub aggregation_enabled: Option<bool>,
}

impl KinesisConfiguration {
    /// Target a Kinesis data stream.
    pub fn new(stream_arn: impl Into<String>) -> Self {
        Self {
            stream_arn: stream_arn.into(),
            aggregation_enabled: None,
        }
    }
}

/// Journal stream status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamStatus {
    /// Streaming.
    Active,
    /// Reached its exclusive end time.
    Completed,
    /// Cancelled by the user.
    Canceled,
    /// Stopped with an error.
    Failed,
    /// Temporarily unable to write.
    Impaired,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Why a journal stream is impaired or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCause {
    /// The Kinesis stream no longer exists.
    KinesisStreamNotFound,
    /// The role lost its permissions.
    IamPermissionRevoked,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Journal stream to Kinesis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JournalKinesisStreamDescription {
    /// Ledger name.
    #[serde(rename = "LedgerName")]
    pub ledger_name: String,
    /// Creation time.
    #[serde(
        rename = "CreationTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub creation_time: Option<DateTime<Utc>>,
    /// Inclusive start of the streamed range.
    #[serde(
        rename = "InclusiveStartTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub inclusive_start_time: Option<DateTime<Utc>>,
    /// Exclusive end of the streamed range.
    #[serde(
        rename = "ExclusiveEndTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub exclusive_end_time: Option<DateTime<Utc>>,
    /// Role used to write to Kinesis.
    #[serde(rename = "RoleArn", default)]
    pub role_arn: Option<String>,
    /// Stream identifier.
    #[serde(rename = "StreamId")]
    pub stream_id: String,
    /// Stream ARN.
    #[serde(rename = "Arn", default)]
    pub arn: Option<String>,
    /// Status.
    #[serde(rename = "Status", default)]
    pub status: Option<StreamStatus>,
    /// Kinesis destination.
    #[serde(rename = "KinesisConfiguration", default)]
    pub kinesis_configuration: Option<KinesisConfiguration>,
    /// Failure cause.
    #[serde(rename = "ErrorCause", default)]
    pub error_cause: Option<ErrorCause>,
    /// User-defined stream name.
    #[serde(rename = "StreamName", default)]
    pub stream_name: Option<String>,
}

/// Amazon Ion value in text form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueHolder {
    /// Ion text.
    #[serde(rename = "IonText", default, skip_serializing_if = "Option::is_none")]
    pub ion_text: Option<String>,
}

impl ValueHolder {
    /// Wrap Ion text, e.g. `{strandId:"BlXinIDgVBdCzNIaFHahb6",sequenceNo:3}`.
    pub fn ion(text: impl Into<String>) -> Self {
        Self {
            ion_text: Some(text.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&PermissionsMode::AllowAll).unwrap(),
            "\"ALLOW_ALL\""
        );
        assert_eq!(
            serde_json::to_string(&S3ObjectEncryptionType::SseKms).unwrap(),
            "\"SSE_KMS\""
        );
        assert_eq!(serde_json::to_string(&OutputFormat::IonBinary).unwrap(), "\"ION_BINARY\"");
        assert_eq!(
            serde_json::from_str::<ErrorCause>("\"IAM_PERMISSION_REVOKED\"").unwrap(),
            ErrorCause::IamPermissionRevoked
        );
    }

    #[test]
    fn test_unknown_enum_value() {
        let state: LedgerState = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert_eq!(state, LedgerState::Unknown);
    }

    #[test]
    fn test_kinesis_stream_description() {
        let description: JournalKinesisStreamDescription = serde_json::from_str(
            r#"{
                "LedgerName": "books",
                "StreamId": "KTLSD0gvk5vEu8FxAkH7xS",
                "CreationTime": 1.61e9,
                "Status": "IMPAIRED",
                "ErrorCause": "KINESIS_STREAM_NOT_FOUND",
                "KinesisConfiguration": {"StreamArn": "arn:aws:kinesis:us-east-1:1:stream/s", "AggregationEnabled": true}
            }"#,
        )
        .unwrap();

        assert_eq!(description.status, Some(StreamStatus::Impaired));
        assert_eq!(description.error_cause, Some(ErrorCause::KinesisStreamNotFound));
        assert_eq!(
            description.kinesis_configuration.unwrap().aggregation_enabled,
            Some(true)
        );
    }
}
