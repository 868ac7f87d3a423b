//! Response types for Marketplace Catalog operations.

use super::common::*;
use serde::Deserialize;

/// Output of `StartChangeSet` and `CancelChangeSet`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeSetReference {
    /// Change set ID.
    #[serde(rename = "ChangeSetId", default)]
    pub change_set_id: Option<String>,
    /// Change set ARN.
    #[serde(rename = "ChangeSetArn", default)]
    pub change_set_arn: Option<String>,
}

/// Output of `StartChangeSet`.
pub type StartChangeSetOutput = ChangeSetReference;
/// Output of `CancelChangeSet`.
pub type CancelChangeSetOutput = ChangeSetReference;

/// Output of `DescribeChangeSet`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeChangeSetOutput {
    /// Change set ID.
    #[serde(rename = "ChangeSetId", default)]
    pub change_set_id: Option<String>,
    /// Change set ARN.
    #[serde(rename = "ChangeSetArn", default)]
    pub change_set_arn: Option<String>,
    /// Change set name.
    #[serde(rename = "ChangeSetName", default)]
    pub change_set_name: Option<String>,
    /// Start time.
    #[serde(rename = "StartTime", default)]
    pub start_time: Option<String>,
    /// End time.
    #[serde(rename = "EndTime", default)]
    pub end_time: Option<String>,
    /// Status.
    #[serde(rename = "Status", default)]
    pub status: Option<ChangeStatus>,
    /// Failure cause.
    #[serde(rename = "FailureCode", default)]
    pub failure_code: Option<FailureCode>,
    /// Failure description.
    #[serde(rename = "FailureDescription", default)]
    pub failure_description: Option<String>,
    /// Changes with their errors.
    #[serde(rename = "ChangeSet", default)]
    pub change_set: Vec<ChangeSummary>,
}

/// Output of `DescribeEntity`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeEntityOutput {
    /// Entity type.
    #[serde(rename = "EntityType", default)]
    pub entity_type: Option<String>,
    /// Entity identifier with revision.
    #[serde(rename = "EntityIdentifier", default)]
    pub entity_identifier: Option<String>,
    /// Entity ARN.
    #[serde(rename = "EntityArn", default)]
    pub entity_arn: Option<String>,
    /// Last change time.
    #[serde(rename = "LastModifiedDate", default)]
    pub last_modified_date: Option<String>,
    /// Entity document as a JSON string.
    #[serde(rename = "Details", default)]
    pub details: Option<String>,
}

impl DescribeEntityOutput {
    /// Parse the entity document.
    pub fn details_json(&self) -> Option<serde_json::Result<serde_json::Value>> {
        self.details.as_deref().map(serde_json::from_str)
    }
}

/// Output of `ListChangeSets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListChangeSetsOutput {
    /// Change sets in the page.
    #[serde(rename = "ChangeSetSummaryList", default)]
    pub change_set_summary_list: Vec<ChangeSetSummaryListItem>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// Output of `ListEntities`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEntitiesOutput {
    /// Entities in the page.
    #[serde(rename = "EntitySummaryList", default)]
    pub entity_summary_list: Vec<EntitySummary>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}
