//! Response types for QLDB operations.

use super::common::*;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Ledger details returned by `CreateLedger`, `DescribeLedger` and
/// `UpdateLedger`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerDescription {
    /// Ledger name.
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Ledger ARN.
    #[serde(rename = "Arn", default)]
    pub arn: Option<String>,
    /// Lifecycle state.
    #[serde(rename = "State", default)]
    pub state: Option<LedgerState>,
    /// Creation time.
    #[serde(
        rename = "CreationDateTime",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub creation_date_time: Option<DateTime<Utc>>,
    /// Permissions mode.
    #[serde(rename = "PermissionsMode", default)]
    pub permissions_mode: Option<PermissionsMode>,
    /// Deletion protection flag.
    #[serde(rename = "DeletionProtection", default)]
    pub deletion_protection: Option<bool>,
    /// KMS key ARN (`CreateLedger` only).
    #[serde(rename = "KmsKeyArn", default)]
    pub kms_key_arn: Option<String>,
    /// Encryption at rest.
    #[serde(rename = "EncryptionDescription", default)]
    pub encryption_description: Option<EncryptionDescription>,
}

/// Output of `CreateLedger`.
pub type CreateLedgerOutput = LedgerDescription;
/// Output of `DescribeLedger`.
pub type DescribeLedgerOutput = LedgerDescription;
/// Output of `UpdateLedger`.
pub type UpdateLedgerOutput = LedgerDescription;

/// Output of `ListLedgers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListLedgersOutput {
    /// Ledgers in the page.
    #[serde(rename = "Ledgers", default)]
    pub ledgers: Vec<LedgerSummary>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `ExportJournalToS3`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportJournalToS3Output {
    /// Export identifier.
    #[serde(rename = "ExportId", default)]
    pub export_id: Option<String>,
}

/// Output of `DescribeJournalS3Export`.
#[derive(Debug, Clone, Deserialize)]
pub struct DescribeJournalS3ExportOutput {
    /// Export job.
    #[serde(rename = "ExportDescription")]
    pub export_description: JournalS3ExportDescription,
}

/// Output of `ListJournalS3Exports` and `ListJournalS3ExportsForLedger`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListJournalS3ExportsOutput {
    /// Export jobs in the page.
    #[serde(rename = "JournalS3Exports", default)]
    pub journal_s3_exports: Vec<JournalS3ExportDescription>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `StreamJournalToKinesis` and `CancelJournalKinesisStream`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalKinesisStreamIdOutput {
    /// Stream identifier.
    #[serde(rename = "StreamId", default)]
    pub stream_id: Option<String>,
}

/// Output of `StreamJournalToKinesis`.
pub type StreamJournalToKinesisOutput = JournalKinesisStreamIdOutput;
/// Output of `CancelJournalKinesisStream`.
pub type CancelJournalKinesisStreamOutput = JournalKinesisStreamIdOutput;

/// Output of `DescribeJournalKinesisStream`.
#[derive(Debug, Clone, Deserialize)]
pub struct DescribeJournalKinesisStreamOutput {
    /// Stream details.
    #[serde(rename = "Stream")]
    pub stream: JournalKinesisStreamDescription,
}

/// Output of `ListJournalKinesisStreamsForLedger`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListJournalKinesisStreamsForLedgerOutput {
    /// Streams in the page.
    #[serde(rename = "Streams", default)]
    pub streams: Vec<JournalKinesisStreamDescription>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `GetBlock`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetBlockOutput {
    /// Block data as Ion text.
    #[serde(rename = "Block", default)]
    pub block: ValueHolder,
    /// Hash chain proof, when a digest tip was given.
    #[serde(rename = "Proof", default)]
    pub proof: Option<ValueHolder>,
}

/// Output of `GetDigest`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetDigestOutput {
    /// SHA-256 digest of the journal.
    #[serde(rename = "Digest", with = "aws_runtime::codec::base64_blob", default)]
    pub digest: Vec<u8>,
    /// Address of the last block covered.
    #[serde(rename = "DigestTipAddress", default)]
    pub digest_tip_address: ValueHolder,
}

/// Output of `GetRevision`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetRevisionOutput {
    /// Hash chain proof, when a digest tip was given.
    #[serde(rename = "Proof", default)]
    pub proof: Option<ValueHolder>,
    /// Document revision as Ion text.
    #[serde(rename = "Revision", default)]
    pub revision: ValueHolder,
}

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTagsForResourceOutput {
    /// Tags on the resource.
    #[serde(rename = "Tags", default)]
    pub tags: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_ledger_output() {
        let output: DescribeLedgerOutput = serde_json::from_str(
            r#"{
                "Name": "books",
                "Arn": "arn:aws:qldb:us-east-1:123456789012:ledger/books",
                "State": "ACTIVE",
                "CreationDateTime": 1.609459200E9,
                "PermissionsMode": "STANDARD",
                "DeletionProtection": true,
                "EncryptionDescription": {
                    "KmsKeyArn": "AWS_OWNED_KMS_KEY",
                    "EncryptionStatus": "ENABLED"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(output.state, Some(LedgerState::Active));
        assert_eq!(output.permissions_mode, Some(PermissionsMode::Standard));
        assert_eq!(output.creation_date_time.unwrap().timestamp(), 1_609_459_200);
        assert_eq!(
            output.encryption_description.unwrap().encryption_status,
            Some(EncryptionStatus::Enabled)
        );
    }

    #[test]
    fn test_digest_is_decoded() {
        let output: GetDigestOutput = serde_json::from_str(
            r#"{
                "Digest": "AAECAw==",
                "DigestTipAddress": {"IonText": "{strandId:\"x\",sequenceNo:9}"}
            }"#,
        )
        .unwrap();

        assert_eq!(output.digest, vec![0, 1, 2, 3]);
        assert!(output.digest_tip_address.ion_text.unwrap().contains("sequenceNo:9"));
    }
}
