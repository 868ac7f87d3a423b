//! Response types for Macie operations.

use super::common::*;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Output of `GetMacieSession`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetMacieSessionOutput {
    /// When Macie was enabled.
    pub created_at: Option<DateTime<Utc>>,
    /// Finding publication frequency.
    pub finding_publishing_frequency: Option<FindingPublishingFrequency>,
    /// Service-linked role ARN.
    pub service_role: Option<String>,
    /// Status.
    pub status: Option<MacieStatus>,
    /// Last status or configuration change.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Output of `GetClassificationExportConfiguration` and
/// `PutClassificationExportConfiguration`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationExportConfigurationOutput {
    /// Current configuration.
    pub configuration: Option<ClassificationExportConfiguration>,
}

/// Output of `ListFindings`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListFindingsOutput {
    /// Finding identifiers in the page.
    pub finding_ids: Vec<String>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SeverityDescription {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Severity of a finding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Severity {
    /// Qualitative level.
    pub description: Option<SeverityDescription>,
    /// Numeric score.
    pub score: Option<i64>,
}

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCategory {
    /// Sensitive data finding.
    Classification,
    /// Bucket policy finding.
    Policy,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Bucket affected by a finding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3BucketSummary {
    /// Bucket ARN.
    pub arn: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Bucket name.
    pub name: Option<String>,
    /// Owner details, kept as raw JSON.
    pub owner: Option<serde_json::Value>,
    /// Public access details, kept as raw JSON.
    pub public_access: Option<serde_json::Value>,
    /// Tags on the bucket, as key/value pairs.
    pub tags: Vec<serde_json::Value>,
}

/// Object affected by a finding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3ObjectSummary {
    /// Bucket ARN.
    pub bucket_arn: Option<String>,
    /// ETag.
    pub e_tag: Option<String>,
    /// File extension.
    pub extension: Option<String>,
    /// Object key.
    pub key: Option<String>,
    /// Last modification time.
    pub last_modified: Option<DateTime<Utc>>,
    /// Full path including the bucket.
    pub path: Option<String>,
    /// Whether the object is public.
    pub public_access: Option<bool>,
    /// Size in bytes.
    pub size: Option<i64>,
    /// Storage class.
    pub storage_class: Option<String>,
    /// Version identifier.
    pub version_id: Option<String>,
}

/// Resources a finding applies to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourcesAffected {
    /// Affected bucket.
    pub s3_bucket: Option<S3BucketSummary>,
    /// Affected object.
    pub s3_object: Option<S3ObjectSummary>,
}

/// A sensitive data or policy finding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Finding {
    /// Account the finding belongs to.
    pub account_id: Option<String>,
    /// Whether the finding is archived.
    pub archived: Option<bool>,
    /// Category.
    pub category: Option<FindingCategory>,
    /// Classification details, kept as raw JSON.
    pub classification_details: Option<serde_json::Value>,
    /// Number of occurrences.
    pub count: Option<i64>,
    /// First occurrence.
    pub created_at: Option<DateTime<Utc>>,
    /// Description.
    pub description: Option<String>,
    /// Finding identifier.
    pub id: Option<String>,
    /// AWS partition.
    pub partition: Option<String>,
    /// Policy details, kept as raw JSON.
    pub policy_details: Option<serde_json::Value>,
    /// Region.
    pub region: Option<String>,
    /// Affected resources.
    pub resources_affected: Option<ResourcesAffected>,
    /// Whether this is a sample finding.
    pub sample: Option<bool>,
    /// Finding schema version.
    pub schema_version: Option<String>,
    /// Severity.
    pub severity: Option<Severity>,
    /// Short title.
    pub title: Option<String>,
    /// Finding type, e.g. `SensitiveData:S3Object/Personal`.
    #[serde(rename = "type")]
    pub finding_type: Option<String>,
    /// Last update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Output of `GetFindings`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetFindingsOutput {
    /// Findings.
    pub findings: Vec<Finding>,
}

/// One group of `GetFindingStatistics`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupCount {
    /// Number of findings.
    pub count: Option<i64>,
    /// Group value.
    pub group_key: Option<String>,
}

/// Output of `GetFindingStatistics`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetFindingStatisticsOutput {
    /// Counts per group.
    pub counts_by_group: Vec<GroupCount>,
}

/// Output of creating or updating a findings filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FindingsFilterIdOutput {
    /// Filter ARN.
    pub arn: Option<String>,
    /// Filter identifier.
    pub id: Option<String>,
}

/// Output of `CreateFindingsFilter`.
pub type CreateFindingsFilterOutput = FindingsFilterIdOutput;
/// Output of `UpdateFindingsFilter`.
pub type UpdateFindingsFilterOutput = FindingsFilterIdOutput;

/// Output of `GetFindingsFilter`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetFindingsFilterOutput {
    /// Action.
    pub action: Option<FindingsFilterAction>,
    /// Filter ARN.
    pub arn: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Conditions.
    pub finding_criteria: Option<FindingCriteria>,
    /// Filter identifier.
    pub id: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Evaluation position.
    pub position: Option<i32>,
    /// Tags.
    pub tags: HashMap<String, String>,
}

/// Filter entry in `ListFindingsFilters`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FindingsFilterListItem {
    /// Action.
    pub action: Option<FindingsFilterAction>,
    /// Filter ARN.
    pub arn: Option<String>,
    /// Filter identifier.
    pub id: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Tags.
    pub tags: HashMap<String, String>,
}

/// Output of `ListFindingsFilters`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListFindingsFiltersOutput {
    /// Filters in the page.
    pub findings_filter_list_items: Vec<FindingsFilterListItem>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of `CreateClassificationJob`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateClassificationJobOutput {
    /// Job ARN.
    pub job_arn: Option<String>,
    /// Job identifier.
    pub job_id: Option<String>,
}

/// Why a job's last run failed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastRunErrorStatus {
    /// `NONE` or `ERROR`.
    pub code: Option<String>,
}

/// Job progress counters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobStatistics {
    /// Objects left to process in the current run.
    pub approximate_number_of_objects_to_process: Option<f64>,
    /// Runs so far.
    pub number_of_runs: Option<f64>,
}

/// Output of `DescribeClassificationJob`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeClassificationJobOutput {
    /// Idempotency token used at creation.
    pub client_token: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Custom data identifiers used.
    pub custom_data_identifier_ids: Vec<String>,
    /// Description.
    pub description: Option<String>,
    /// Whether existing objects were analyzed right away.
    pub initial_run: Option<bool>,
    /// Job ARN.
    pub job_arn: Option<String>,
    /// Job identifier.
    pub job_id: Option<String>,
    /// Status.
    pub job_status: Option<JobStatus>,
    /// Type.
    pub job_type: Option<JobType>,
    /// Error status of the last run.
    pub last_run_error_status: Option<LastRunErrorStatus>,
    /// Start of the last run.
    pub last_run_time: Option<DateTime<Utc>>,
    /// Name.
    pub name: Option<String>,
    /// Buckets and objects analyzed.
    pub s3_job_definition: Option<S3JobDefinition>,
    /// Sampling percentage.
    pub sampling_percentage: Option<i32>,
    /// Recurrence.
    pub schedule_frequency: Option<JobScheduleFrequency>,
    /// Progress counters.
    pub statistics: Option<JobStatistics>,
    /// Tags.
    pub tags: HashMap<String, String>,
    /// Pause details, kept as raw JSON.
    pub user_paused_details: Option<serde_json::Value>,
}

/// Job entry in `ListClassificationJobs`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSummary {
    /// Buckets analyzed.
    pub bucket_definitions: Vec<S3BucketDefinitionForJob>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Job identifier.
    pub job_id: Option<String>,
    /// Status.
    pub job_status: Option<JobStatus>,
    /// Type.
    pub job_type: Option<JobType>,
    /// Error status of the last run.
    pub last_run_error_status: Option<LastRunErrorStatus>,
    /// Name.
    pub name: Option<String>,
}

/// Output of `ListClassificationJobs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListClassificationJobsOutput {
    /// Jobs in the page.
    pub items: Vec<JobSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of `CreateCustomDataIdentifier`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCustomDataIdentifierOutput {
    /// Identifier of the new custom data identifier.
    pub custom_data_identifier_id: Option<String>,
}

/// Custom data identifier entry in batch and list results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomDataIdentifierSummary {
    /// ARN.
    pub arn: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Whether it was deleted (batch results only).
    pub deleted: Option<bool>,
    /// Description.
    pub description: Option<String>,
    /// Identifier.
    pub id: Option<String>,
    /// Name.
    pub name: Option<String>,
}

/// Output of `BatchGetCustomDataIdentifiers`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchGetCustomDataIdentifiersOutput {
    /// Identifiers found.
    pub custom_data_identifiers: Vec<CustomDataIdentifierSummary>,
    /// Requested identifiers that do not exist.
    pub not_found_identifier_ids: Vec<String>,
}

/// Output of `ListCustomDataIdentifiers`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListCustomDataIdentifiersOutput {
    /// Identifiers in the page.
    pub items: Vec<CustomDataIdentifierSummary>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of `GetCustomDataIdentifier`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetCustomDataIdentifierOutput {
    /// ARN.
    pub arn: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Whether it was deleted.
    pub deleted: Option<bool>,
    /// Description.
    pub description: Option<String>,
    /// Identifier.
    pub id: Option<String>,
    /// Words that exclude a match.
    pub ignore_words: Vec<String>,
    /// Words that must appear near a match.
    pub keywords: Vec<String>,
    /// Maximum keyword distance.
    pub maximum_match_distance: Option<i32>,
    /// Name.
    pub name: Option<String>,
    /// Pattern.
    pub regex: Option<String>,
    /// Tags.
    pub tags: HashMap<String, String>,
}

/// Output of `TestCustomDataIdentifier`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestCustomDataIdentifierOutput {
    /// Number of matches in the sample text.
    pub match_count: Option<i32>,
}

/// Output of `CreateMember`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateMemberOutput {
    /// Member ARN.
    pub arn: Option<String>,
}

/// Output of `GetMember`.
pub type GetMemberOutput = Member;

/// Output of `ListMembers`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListMembersOutput {
    /// Members in the page.
    pub members: Vec<Member>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of `CreateInvitations`, `DeclineInvitations` and
/// `DeleteInvitations`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnprocessedAccountsOutput {
    /// Accounts that could not be processed.
    pub unprocessed_accounts: Vec<UnprocessedAccount>,
}

/// Output of `ListInvitations`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListInvitationsOutput {
    /// Invitations in the page.
    pub invitations: Vec<Invitation>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of `GetInvitationsCount`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetInvitationsCountOutput {
    /// Pending invitations, excluding accepted ones.
    pub invitations_count: Option<i64>,
}

/// Output of `GetMasterAccount`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetMasterAccountOutput {
    /// Administrator account and invitation.
    pub master: Option<Invitation>,
}

/// Output of `ListOrganizationAdminAccounts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListOrganizationAdminAccountsOutput {
    /// Delegated administrators.
    pub admin_accounts: Vec<AdminAccount>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of `DescribeOrganizationConfiguration`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeOrganizationConfigurationOutput {
    /// Whether new organization accounts get Macie automatically.
    pub auto_enable: Option<bool>,
    /// Whether the member quota is reached.
    pub max_account_limit_reached: Option<bool>,
}

/// Bucket metadata from `DescribeBuckets`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BucketMetadata {
    /// Owning account.
    pub account_id: Option<String>,
    /// Bucket ARN.
    pub bucket_arn: Option<String>,
    /// Bucket creation time.
    pub bucket_created_at: Option<DateTime<Utc>>,
    /// Bucket name.
    pub bucket_name: Option<String>,
    /// Objects Macie can analyze.
    pub classifiable_object_count: Option<i64>,
    /// Bytes Macie can analyze.
    pub classifiable_size_in_bytes: Option<i64>,
    /// Last time Macie refreshed the metadata.
    pub last_updated: Option<DateTime<Utc>>,
    /// Object count.
    pub object_count: Option<i64>,
    /// Public access details, kept as raw JSON.
    pub public_access: Option<serde_json::Value>,
    /// Region.
    pub region: Option<String>,
    /// `EXTERNAL`, `INTERNAL`, `NOT_SHARED` or `UNKNOWN`.
    pub shared_access: Option<String>,
    /// Total storage size.
    pub size_in_bytes: Option<i64>,
    /// Whether versioning is enabled.
    pub versioning: Option<bool>,
}

/// Output of `DescribeBuckets`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeBucketsOutput {
    /// Buckets in the page.
    pub buckets: Vec<BucketMetadata>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of `GetBucketStatistics`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetBucketStatisticsOutput {
    /// Number of buckets.
    pub bucket_count: Option<i64>,
    /// Counts by effective public access, kept as raw JSON.
    pub bucket_count_by_effective_permission: Option<serde_json::Value>,
    /// Counts by default encryption, kept as raw JSON.
    pub bucket_count_by_encryption_type: Option<serde_json::Value>,
    /// Counts by shared access type, kept as raw JSON.
    pub bucket_count_by_shared_access_type: Option<serde_json::Value>,
    /// Objects Macie can analyze.
    pub classifiable_object_count: Option<i64>,
    /// Bytes Macie can analyze.
    pub classifiable_size_in_bytes: Option<i64>,
    /// Last refresh.
    pub last_updated: Option<DateTime<Utc>>,
    /// Object count.
    pub object_count: Option<i64>,
    /// Total storage size.
    pub size_in_bytes: Option<i64>,
    /// Total compressed storage size.
    pub size_in_bytes_compressed: Option<i64>,
}

/// Service quota for a usage type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceLimit {
    /// Whether the account reached the quota.
    pub is_service_limited: Option<bool>,
    /// Unit, e.g. `TERABYTES`.
    pub unit: Option<String>,
    /// Quota value.
    pub value: Option<i64>,
}

/// Usage of one type for one account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageByAccount {
    /// Currency.
    pub currency: Option<Currency>,
    /// Estimated cost, as a decimal string.
    pub estimated_cost: Option<String>,
    /// Quota.
    pub service_limit: Option<ServiceLimit>,
    /// Usage type.
    #[serde(rename = "type")]
    pub usage_type: Option<UsageType>,
}

/// Usage record of an account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageRecord {
    /// Account ID.
    pub account_id: Option<String>,
    /// Free trial start.
    pub free_trial_start_date: Option<DateTime<Utc>>,
    /// Usage per type.
    pub usage: Vec<UsageByAccount>,
}

/// Output of `GetUsageStatistics`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetUsageStatisticsOutput {
    /// Records in the page.
    pub records: Vec<UsageRecord>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of `GetUsageTotals`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetUsageTotalsOutput {
    /// Totals per usage type.
    pub usage_totals: Vec<UsageTotal>,
}

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListTagsForResourceOutput {
    /// Tags on the resource.
    pub tags: HashMap<String, String>,
}
