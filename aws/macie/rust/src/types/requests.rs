//! Request types for Macie operations.
//!
//! `client_token` members are filled with a random UUID when left unset, so
//! that retries of the same call stay idempotent.

use super::common::*;
use serde::Serialize;
use std::collections::HashMap;

/// Input for `EnableMacie`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableMacieRequest {
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Finding publication frequency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_publishing_frequency: Option<FindingPublishingFrequency>,
    /// Initial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MacieStatus>,
}

impl EnableMacieRequest {
    /// Enable with service defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the finding publication frequency.
    pub fn with_finding_publishing_frequency(mut self, frequency: FindingPublishingFrequency) -> Self {
        self.finding_publishing_frequency = Some(frequency);
        self
    }
}

/// Input for `UpdateMacieSession`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMacieSessionRequest {
    /// Finding publication frequency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_publishing_frequency: Option<FindingPublishingFrequency>,
    /// Suspend or resume Macie.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MacieStatus>,
}

/// Input for `ListFindings`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFindingsRequest {
    /// Filter conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_criteria: Option<FindingCriteria>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<SortCriteria>,
}

impl ListFindingsRequest {
    /// List all findings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter findings.
    pub fn with_criteria(mut self, criteria: FindingCriteria) -> Self {
        self.finding_criteria = Some(criteria);
        self
    }

    /// Sort findings.
    pub fn with_sort(mut self, sort: SortCriteria) -> Self {
        self.sort_criteria = Some(sort);
        self
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max: i32) -> Self {
        self.max_results = Some(max);
        self
    }
}

/// Attribute to group finding statistics by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupBy {
    /// Bucket name.
    #[serde(rename = "resourcesAffected.s3Bucket.name")]
    BucketName,
    /// Finding type.
    #[serde(rename = "type")]
    Type,
    /// Classification job.
    #[serde(rename = "classificationDetails.jobId")]
    JobId,
    /// Severity.
    #[serde(rename = "severity.description")]
    Severity,
}

/// Input for `GetFindingStatistics`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingStatisticsRequest {
    /// Filter conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_criteria: Option<FindingCriteria>,
    /// Grouping attribute.
    pub group_by: GroupBy,
    /// Maximum number of groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    /// Sort order of the groups (`groupKey` or `count`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<SortCriteria>,
}

impl GetFindingStatisticsRequest {
    /// Count findings grouped by an attribute.
    pub fn new(group_by: GroupBy) -> Self {
        Self {
            finding_criteria: None,
            group_by,
            size: None,
            sort_criteria: None,
        }
    }

    /// Filter findings.
    pub fn with_criteria(mut self, criteria: FindingCriteria) -> Self {
        self.finding_criteria = Some(criteria);
        self
    }
}

/// Input for `CreateFindingsFilter`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFindingsFilterRequest {
    /// Action applied to matching findings.
    pub action: FindingsFilterAction,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Filter conditions.
    pub finding_criteria: FindingCriteria,
    /// Filter name.
    pub name: String,
    /// Evaluation order relative to other filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreateFindingsFilterRequest {
    /// Create a request with the required members.
    pub fn new(
        name: impl Into<String>,
        action: FindingsFilterAction,
        finding_criteria: FindingCriteria,
    ) -> Self {
        Self {
            action,
            client_token: None,
            description: None,
            finding_criteria,
            name: name.into(),
            position: None,
            tags: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the evaluation position.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }
}

/// Input for `UpdateFindingsFilter`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFindingsFilterRequest {
    /// Filter identifier (path).
    #[serde(skip)]
    pub id: String,
    /// New action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<FindingsFilterAction>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding_criteria: Option<FindingCriteria>,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

impl UpdateFindingsFilterRequest {
    /// Update a filter.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the action.
    pub fn with_action(mut self, action: FindingsFilterAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Pagination parameters for GET list operations, sent as `maxResults` and
/// `nextToken` query parameters.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    /// Page size.
    pub max_results: Option<i32>,
    /// Continuation token.
    pub next_token: Option<String>,
}

impl ListRequest {
    /// First page.
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

/// Input for `CreateClassificationJob`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassificationJobRequest {
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Custom data identifiers to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data_identifier_ids: Option<Vec<String>>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether a scheduled job also analyzes existing objects right away.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_run: Option<bool>,
    /// Job type.
    pub job_type: JobType,
    /// Job name.
    pub name: String,
    /// Buckets and objects to analyze.
    pub s3_job_definition: S3JobDefinition,
    /// Percentage of eligible objects to analyze.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_percentage: Option<i32>,
    /// Recurrence of a scheduled job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_frequency: Option<JobScheduleFrequency>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreateClassificationJobRequest {
    /// A one-time job.
    pub fn one_time(name: impl Into<String>, s3_job_definition: S3JobDefinition) -> Self {
        Self {
            client_token: None,
            custom_data_identifier_ids: None,
            description: None,
            initial_run: None,
            job_type: JobType::OneTime,
            name: name.into(),
            s3_job_definition,
            sampling_percentage: None,
            schedule_frequency: None,
            tags: None,
        }
    }

    /// A scheduled job.
    pub fn scheduled(
        name: impl Into<String>,
        s3_job_definition: S3JobDefinition,
        frequency: JobScheduleFrequency,
    ) -> Self {
        Self {
            job_type: JobType::Scheduled,
            schedule_frequency: Some(frequency),
            ..Self::one_time(name, s3_job_definition)
        }
    }

    /// Set the sampling percentage.
    pub fn with_sampling_percentage(mut self, percentage: i32) -> Self {
        self.sampling_percentage = Some(percentage);
        self
    }

    /// Use custom data identifiers.
    pub fn with_custom_data_identifier_ids(mut self, ids: Vec<String>) -> Self {
        self.custom_data_identifier_ids = Some(ids);
        self
    }

    /// Set the idempotency token.
    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

/// Comparison operator for job filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobComparator {
    /// Equal.
    Eq,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Not equal.
    Ne,
    /// Contains.
    Contains,
}

/// Job attribute a filter term applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListJobsFilterKey {
    /// Job type.
    JobType,
    /// Job status.
    JobStatus,
    /// Creation time.
    CreatedAt,
    /// Job name.
    Name,
}

/// One condition of a job filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsFilterTerm {
    /// Operator.
    pub comparator: JobComparator,
    /// Attribute.
    pub key: ListJobsFilterKey,
    /// Values to compare with.
    pub values: Vec<String>,
}

/// Include and exclude conditions for `ListClassificationJobs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsFilterCriteria {
    /// Jobs to exclude.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<ListJobsFilterTerm>,
    /// Jobs to include.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<ListJobsFilterTerm>,
}

/// Input for `ListClassificationJobs`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClassificationJobsRequest {
    /// Filter conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_criteria: Option<ListJobsFilterCriteria>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<SortCriteria>,
}

/// Input for `CreateCustomDataIdentifier`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomDataIdentifierRequest {
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Words that exclude a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_words: Option<Vec<String>>,
    /// Words that must appear near a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Maximum distance between a keyword and a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_match_distance: Option<i32>,
    /// Identifier name.
    pub name: String,
    /// Regular expression defining the pattern.
    pub regex: String,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreateCustomDataIdentifierRequest {
    /// Create a request with the required members.
    pub fn new(name: impl Into<String>, regex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regex: regex.into(),
            ..Default::default()
        }
    }

    /// Require keywords near a match.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Set the maximum keyword distance.
    pub fn with_maximum_match_distance(mut self, distance: i32) -> Self {
        self.maximum_match_distance = Some(distance);
        self
    }
}

/// Input for `TestCustomDataIdentifier`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCustomDataIdentifierRequest {
    /// Words that exclude a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_words: Option<Vec<String>>,
    /// Words that must appear near a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Maximum distance between a keyword and a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_match_distance: Option<i32>,
    /// Regular expression to test.
    pub regex: String,
    /// Text to test against.
    pub sample_text: String,
}

impl TestCustomDataIdentifierRequest {
    /// Create a request with the required members.
    pub fn new(regex: impl Into<String>, sample_text: impl Into<String>) -> Self {
        Self {
            regex: regex.into(),
            sample_text: sample_text.into(),
            ..Default::default()
        }
    }
}

/// Input for `CreateMember`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    /// Account to add.
    pub account: AccountDetail,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreateMemberRequest {
    /// Add an account.
    pub fn new(account_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            account: AccountDetail {
                account_id: account_id.into(),
                email: email.into(),
            },
            tags: None,
        }
    }
}

/// Input for `CreateInvitations`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationsRequest {
    /// Accounts to invite.
    pub account_ids: Vec<String>,
    /// Skip the notification email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_email_notification: Option<bool>,
    /// Message included in the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CreateInvitationsRequest {
    /// Invite accounts.
    pub fn new(account_ids: Vec<String>) -> Self {
        Self {
            account_ids,
            ..Default::default()
        }
    }

    /// Set the email message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Input for `AcceptInvitation`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitationRequest {
    /// Invitation identifier.
    pub invitation_id: String,
    /// Administrator account that sent the invitation.
    pub master_account: String,
}

/// Comparison operator for bucket criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCriteriaAdditionalProperties {
    /// Equal to any of the values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<Vec<String>>,
    /// Not equal to any of the values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neq: Option<Vec<String>>,
    /// Greater than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    /// Greater than or equal to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
    /// Less than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    /// Less than or equal to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
    /// Starts with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Input for `DescribeBuckets`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeBucketsRequest {
    /// Conditions keyed by bucket attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<HashMap<String, BucketCriteriaAdditionalProperties>>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<SortCriteria>,
}

impl DescribeBucketsRequest {
    /// Describe all buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bucket condition.
    pub fn with_criterion(
        mut self,
        attribute: impl Into<String>,
        condition: BucketCriteriaAdditionalProperties,
    ) -> Self {
        self.criteria
            .get_or_insert_with(HashMap::new)
            .insert(attribute.into(), condition);
        self
    }
}

/// Filter key for usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UsageStatisticsFilterKey {
    /// Account ID.
    AccountId,
    /// Service quota.
    ServiceLimit,
    /// Free trial start date.
    FreeTrialStartDate,
    /// Total estimated cost.
    Total,
}

/// Condition on usage statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStatisticsFilter {
    /// Operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<JobComparator>,
    /// Attribute.
    pub key: UsageStatisticsFilterKey,
    /// Values to compare with.
    pub values: Vec<String>,
}

/// Sort key for usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UsageStatisticsSortKey {
    /// Account ID.
    #[serde(rename = "accountId")]
    AccountId,
    /// Total estimated cost.
    #[serde(rename = "total")]
    Total,
    /// Service quota.
    #[serde(rename = "serviceLimitValue")]
    ServiceLimitValue,
    /// Free trial start date.
    #[serde(rename = "freeTrialStartDate")]
    FreeTrialStartDate,
}

/// Sort order for usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStatisticsSortBy {
    /// Sort key.
    pub key: UsageStatisticsSortKey,
    /// Direction.
    pub order_by: OrderBy,
}

/// Input for `GetUsageStatistics`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsageStatisticsRequest {
    /// Filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<Vec<UsageStatisticsFilter>>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<UsageStatisticsSortBy>,
}

/// Input for `TagResource`.
#[derive(Debug, Clone, Serialize)]
pub struct TagResourceRequest {
    /// Resource ARN (path).
    #[serde(skip)]
    pub resource_arn: String,
    /// Tags to add or overwrite.
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

    #[test]
    fn test_create_job_body() {
        let request = CreateClassificationJobRequest::scheduled(
            "weekly-scan",
            S3JobDefinition {
                bucket_definitions: vec![S3BucketDefinitionForJob::new(
                    "111122223333",
                    ["payroll"],
                )],
                scoping: None,
            },
            JobScheduleFrequency::monthly(1),
        )
        .with_client_token("token-1");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "clientToken": "token-1",
                "jobType": "SCHEDULED",
                "name": "weekly-scan",
                "s3JobDefinition": {
                    "bucketDefinitions": [{ "accountId": "111122223333", "buckets": ["payroll"] }]
                },
                "scheduleFrequency": { "monthlySchedule": { "dayOfMonth": 1 } }
            })
        );
    }

    #[test]
    fn test_group_by_wire_names() {
        let request = GetFindingStatisticsRequest::new(GroupBy::BucketName);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "groupBy": "resourcesAffected.s3Bucket.name" })
        );
    }

    #[test]
    fn test_list_jobs_filter() {
        let request = ListClassificationJobsRequest {
            filter_criteria: Some(ListJobsFilterCriteria {
                includes: vec![ListJobsFilterTerm {
                    comparator: JobComparator::Eq,
                    key: ListJobsFilterKey::JobStatus,
                    values: vec!["RUNNING".to_string()],
                }],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "filterCriteria": {
                    "includes": [{ "comparator": "EQ", "key": "jobStatus", "values": ["RUNNING"] }]
                }
            })
        );
    }

    #[test]
    fn test_update_filter_id_not_in_body() {
        let request = UpdateFindingsFilterRequest::new("f-1").with_action(FindingsFilterAction::Noop);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "action": "NOOP" })
        );
    }
}
