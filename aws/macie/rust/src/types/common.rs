//! Shared Macie types: enums, criteria and nested structures used by both
//! requests and responses.
//!
//! Macie uses camelCase member names and ISO-8601 timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How often findings are published to EventBridge and Security Hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingPublishingFrequency {
    /// Every 15 minutes.
    FifteenMinutes,
    /// Every hour.
    OneHour,
    /// Every six hours.
    SixHours,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Status of Macie for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MacieStatus {
    /// Suspended; no jobs run and no data is monitored.
    Paused,
    /// Running.
    Enabled,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderBy {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Sort order for findings, buckets and jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortCriteria {
    /// Attribute to sort by, e.g. `updatedAt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    /// Direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

impl SortCriteria {
    /// Sort by an attribute.
    pub fn new(attribute_name: impl Into<String>, order_by: OrderBy) -> Self {
        Self {
            attribute_name: Some(attribute_name.into()),
            order_by: Some(order_by),
        }
    }
}

/// Operator conditions for one finding attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionAdditionalProperties {
    /// Equal to any of the values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<Vec<String>>,
    /// Equal to any of the values, case-sensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq_exact_match: Option<Vec<String>>,
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
}

/// Conditions that findings must match, keyed by attribute path such as
/// `severity.description`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindingCriteria {
    /// Conditions per attribute.
    #[serde(default)]
    pub criterion: HashMap<String, CriterionAdditionalProperties>,
}

impl FindingCriteria {
    /// Empty criteria matching every finding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the attribute to equal one of the values.
    pub fn with_eq<I, S>(mut self, attribute: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criterion.entry(attribute.into()).or_default().eq =
            Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Require the attribute to be at least `value`.
    pub fn with_gte(mut self, attribute: impl Into<String>, value: i64) -> Self {
        self.criterion.entry(attribute.into()).or_default().gte = Some(value);
        self
    }
}

/// Action a findings filter applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingsFilterAction {
    /// Suppress (auto-archive) matching findings.
    Archive,
    /// Only save the filter.
    Noop,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Classification job type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    /// Runs once.
    OneTime,
    /// Runs on a schedule.
    Scheduled,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Classification job status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// In progress.
    Running,
    /// Paused by Macie.
    Paused,
    /// Cancelled.
    Cancelled,
    /// Finished a one-time run.
    Complete,
    /// Waiting for the next scheduled run.
    Idle,
    /// Paused by the user.
    UserPaused,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// S3 buckets of one account to analyze.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3BucketDefinitionForJob {
    /// Account that owns the buckets.
    pub account_id: String,
    /// Bucket names.
    #[serde(default)]
    pub buckets: Vec<String>,
}

impl S3BucketDefinitionForJob {
    /// Buckets of one account.
    pub fn new<I, S>(account_id: impl Into<String>, buckets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            account_id: account_id.into(),
            buckets: buckets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Objects a classification job analyzes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3JobDefinition {
    /// Buckets to analyze.
    #[serde(default)]
    pub bucket_definitions: Vec<S3BucketDefinitionForJob>,
    /// Object include/exclude conditions, kept as raw JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoping: Option<serde_json::Value>,
}

/// Day of the week for weekly jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Recurrence of a scheduled job. Exactly one member is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobScheduleFrequency {
    /// Run every day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_schedule: Option<HashMap<String, serde_json::Value>>,
    /// Run on a day of the month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_schedule: Option<MonthlySchedule>,
    /// Run on a day of the week.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_schedule: Option<WeeklySchedule>,
}

impl JobScheduleFrequency {
    /// Run every day.
    pub fn daily() -> Self {
        Self {
            daily_schedule: Some(HashMap::new()),
            ..Default::default()
        }
    }

    /// Run weekly.
    pub fn weekly(day_of_week: DayOfWeek) -> Self {
        Self {
            weekly_schedule: Some(WeeklySchedule { day_of_week }),
            ..Default::default()
        }
    }

    /// Run monthly; days past the end of a month run on its last day.
    pub fn monthly(day_of_month: i32) -> Self {
        Self {
            monthly_schedule: Some(MonthlySchedule { day_of_month }),
            ..Default::default()
        }
    }
}

/// Monthly recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySchedule {
    /// Day of the month, 1 to 31.
    pub day_of_month: i32,
}

/// Weekly recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    /// Day of the week.
    pub day_of_week: DayOfWeek,
}

/// Relationship between a Macie administrator and a member account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipStatus {
    /// Member with Macie enabled.
    Enabled,
    /// Member with Macie suspended.
    Paused,
    /// Invitation sent.
    Invited,
    /// Member added but not invited.
    Created,
    /// Removed by the administrator.
    Removed,
    /// Member left the organization.
    Resigned,
    /// Email address being verified.
    EmailVerificationInProgress,
    /// Email address could not be verified.
    EmailVerificationFailed,
    /// Region disabled for the account.
    RegionDisabled,
    /// Account suspended.
    AccountSuspended,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Account identifier and email address for a new member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetail {
    /// Account ID.
    pub account_id: String,
    /// Email address of the account.
    pub email: String,
}

/// An invitation received from or sent to another account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invitation {
    /// Account that sent the invitation.
    pub account_id: Option<String>,
    /// Invitation identifier.
    pub invitation_id: Option<String>,
    /// When the invitation was sent.
    pub invited_at: Option<DateTime<Utc>>,
    /// Relationship status.
    pub relationship_status: Option<RelationshipStatus>,
}

/// An account that could not be processed by a batch invitation request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnprocessedAccount {
    /// Account ID.
    pub account_id: Option<String>,
    /// Error code.
    pub error_code: Option<String>,
    /// Error message.
    pub error_message: Option<String>,
}

/// Member account of a Macie administrator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    /// Account ID.
    pub account_id: Option<String>,
    /// Member ARN.
    pub arn: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// When the invitation was sent.
    pub invited_at: Option<DateTime<Utc>>,
    /// Administrator account ID.
    pub master_account_id: Option<String>,
    /// Relationship status.
    pub relationship_status: Option<RelationshipStatus>,
    /// Tags.
    pub tags: HashMap<String, String>,
    /// Last status change.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Delegated administrator status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminStatus {
    /// Designated administrator.
    Enabled,
    /// Being removed as administrator.
    DisablingInProgress,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Delegated administrator of an organization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminAccount {
    /// Account ID.
    pub account_id: Option<String>,
    /// Status.
    pub status: Option<AdminStatus>,
}

/// Output destination of classification results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Destination {
    /// Bucket name.
    pub bucket_name: String,
    /// Key prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_prefix: Option<String>,
    /// KMS key used to encrypt results.
    pub kms_key_arn: String,
}

/// Where Macie stores sensitive data discovery results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationExportConfiguration {
    /// S3 destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_destination: Option<S3Destination>,
}

/// Kind of Macie usage that is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageType {
    /// Bucket inventory and monitoring.
    DataInventoryEvaluation,
    /// Object classification.
    SensitiveDataDiscovery,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Billing currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// US dollars.
    #[serde(rename = "USD")]
    Usd,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Estimated cost of one usage type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageTotal {
    /// Currency.
    pub currency: Option<Currency>,
    /// Estimated cost, as a decimal string.
    pub estimated_cost: Option<String>,
    /// Usage type.
    #[serde(rename = "type")]
    pub usage_type: Option<UsageType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_criteria_body() {
        let criteria = FindingCriteria::new()
            .with_eq("severity.description", ["High"])
            .with_gte("count", 2);
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "criterion": {
                    "severity.description": { "eq": ["High"] },
                    "count": { "gte": 2 }
                }
            })
        );
    }

    #[test]
    fn test_schedule_frequency() {
        assert_eq!(
            serde_json::to_value(JobScheduleFrequency::daily()).unwrap(),
            serde_json::json!({ "dailySchedule": {} })
        );
        assert_eq!(
            serde_json::to_value(JobScheduleFrequency::weekly(DayOfWeek::Monday)).unwrap(),
            serde_json::json!({ "weeklySchedule": { "dayOfWeek": "MONDAY" } })
        );
    }

    #[test]
    fn test_member_iso_timestamps() {
        let member: Member = serde_json::from_str(
            r#"{
                "accountId": "111122223333",
                "relationshipStatus": "EmailVerificationInProgress",
                "invitedAt": "2020-05-14T20:15:02.123Z"
            }"#,
        )
        .unwrap();
        assert_eq!(
            member.relationship_status,
            Some(RelationshipStatus::EmailVerificationInProgress)
        );
        assert_eq!(member.invited_at.unwrap().timestamp_subsec_millis(), 123);
    }
}
