//! Shared Marketplace Catalog types.
//!
//! Timestamps are ISO-8601 strings on the wire and are kept as strings.

use serde::{Deserialize, Serialize};

/// The only catalog the service exposes.
pub const AWS_MARKETPLACE_CATALOG: &str = "AWSMarketplace";

/// Change set lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    /// Being validated.
    Preparing,
    /// Being applied.
    Applying,
    /// All changes applied.
    Succeeded,
    /// Cancelled before completion.
    Cancelled,
    /// At least one change failed; none were applied.
    Failed,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

impl ChangeStatus {
    /// Whether the change set will not change state again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Cancelled | Self::Failed)
    }
}

/// Who caused a failed change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureCode {
    /// Bad input.
    ClientError,
    /// Service-side failure.
    ServerFault,
    /// A value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    /// Ascending.
    Ascending,
    /// Descending.
    Descending,
}

/// Sort key and direction for list operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    /// Attribute to sort by, such as `StartTime`.
    #[serde(rename = "SortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Direction.
    #[serde(rename = "SortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Sort {
    /// Sort by an attribute.
    pub fn new(sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            sort_by: Some(sort_by.into()),
            sort_order: Some(sort_order),
        }
    }
}

/// List filter. Values are exact matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    /// Attribute name, such as `Status` or `EntityId`.
    #[serde(rename = "Name")]
    pub name: String,
    /// Accepted values.
    #[serde(rename = "ValueList")]
    pub value_list: Vec<String>,
}

impl Filter {
    /// Match any of the values.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            value_list: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Entity a change applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type with version, e.g. `ServerProduct@1.0`.
    #[serde(rename = "Type")]
    pub entity_type: String,
    /// Entity identifier; absent for create changes.
    #[serde(rename = "Identifier", skip_serializing_if = "Option::is_none", default)]
    pub identifier: Option<String>,
}

impl Entity {
    /// A new entity of a type.
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            identifier: None,
        }
    }

    /// An existing entity.
    pub fn existing(entity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            identifier: Some(identifier.into()),
        }
    }
}

/// Error for one change of a change set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    /// Error code.
    #[serde(rename = "ErrorCode", default)]
    pub error_code: Option<String>,
    /// Error message.
    #[serde(rename = "ErrorMessage", default)]
    pub error_message: Option<String>,
}

/// Change as reported by `DescribeChangeSet`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChangeSummary {
    /// Change type.
    #[serde(rename = "ChangeType", default)]
    pub change_type: Option<String>,
    /// Target entity.
    #[serde(rename = "Entity", default)]
    pub entity: Option<Entity>,
    /// Change details as a JSON string.
    #[serde(rename = "Details", default)]
    pub details: Option<String>,
    /// Errors for this change.
    #[serde(rename = "ErrorDetailList", default)]
    pub error_detail_list: Vec<ErrorDetail>,
    /// Optional change name.
    #[serde(rename = "ChangeName", default)]
    pub change_name: Option<String>,
}

impl ChangeSummary {
    /// Parse the details document.
    pub fn details_json(&self) -> Option<serde_json::Result<serde_json::Value>> {
        self.details.as_deref().map(serde_json::from_str)
    }
}

/// Change set entry in `ListChangeSets`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChangeSetSummaryListItem {
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
    /// Entities touched.
    #[serde(rename = "EntityIdList", default)]
    pub entity_id_list: Vec<String>,
    /// Failure cause.
    #[serde(rename = "FailureCode", default)]
    pub failure_code: Option<FailureCode>,
}

/// Entity entry in `ListEntities`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntitySummary {
    /// Display name.
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Entity type.
    #[serde(rename = "EntityType", default)]
    pub entity_type: Option<String>,
    /// Entity ID.
    #[serde(rename = "EntityId", default)]
    pub entity_id: Option<String>,
    /// Entity ARN.
    #[serde(rename = "EntityArn", default)]
    pub entity_arn: Option<String>,
    /// Last change time.
    #[serde(rename = "LastModifiedDate", default)]
    pub last_modified_date: Option<String>,
    /// Visibility, such as `Public` or `Limited`.
    #[serde(rename = "Visibility", default)]
    pub visibility: Option<String>,
}
