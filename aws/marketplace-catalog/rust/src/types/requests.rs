//! Request types for Marketplace Catalog operations.

use super::common::*;
use aws_runtime::AwsError;
use serde::Serialize;

/// One change in a change set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    /// Change type, such as `UpdateInformation`.
    #[serde(rename = "ChangeType")]
    pub change_type: String,
    /// Target entity.
    #[serde(rename = "Entity")]
    pub entity: Entity,
    /// Change details as a JSON string.
    #[serde(rename = "Details")]
    pub details: String,
    /// Optional name, usable to reference this change from later changes.
    #[serde(rename = "ChangeName", skip_serializing_if = "Option::is_none")]
    pub change_name: Option<String>,
}

impl Change {
    /// Create a change, encoding `details` as the JSON string the service
    /// expects.
    pub fn new<T: Serialize>(
        change_type: impl Into<String>,
        entity: Entity,
        details: &T,
    ) -> Result<Self, AwsError> {
        let details = serde_json::to_string(details)
            .map_err(|e| AwsError::validation(format!("invalid change details: {}", e)))?;
        Ok(Self {
            change_type: change_type.into(),
            entity,
            details,
            change_name: None,
        })
    }

    /// Name the change.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.change_name = Some(name.into());
        self
    }
}

/// Input for `StartChangeSet`.
#[derive(Debug, Clone, Serialize)]
pub struct StartChangeSetRequest {
    /// Catalog name.
    #[serde(rename = "Catalog")]
    pub catalog: String,
    /// Changes, applied together or not at all.
    #[serde(rename = "ChangeSet")]
    pub change_set: Vec<Change>,
    /// Change set name.
    #[serde(rename = "ChangeSetName", skip_serializing_if = "Option::is_none")]
    pub change_set_name: Option<String>,
    /// Idempotency token; generated when unset.
    #[serde(rename = "ClientRequestToken", skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl StartChangeSetRequest {
    /// Changes against the AWS Marketplace catalog.
    pub fn new(change_set: Vec<Change>) -> Self {
        Self {
            catalog: AWS_MARKETPLACE_CATALOG.to_string(),
            change_set,
            change_set_name: None,
            client_request_token: None,
        }
    }

    /// Name the change set.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.change_set_name = Some(name.into());
        self
    }

    /// Set the idempotency token.
    pub fn with_client_request_token(mut self, token: impl Into<String>) -> Self {
        self.client_request_token = Some(token.into());
        self
    }
}

/// Input for `ListChangeSets`.
#[derive(Debug, Clone, Serialize)]
pub struct ListChangeSetsRequest {
    /// Catalog name.
    #[serde(rename = "Catalog")]
    pub catalog: String,
    /// Filters.
    #[serde(rename = "FilterList", skip_serializing_if = "Vec::is_empty")]
    pub filter_list: Vec<Filter>,
    /// Sort order.
    #[serde(rename = "Sort", skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    /// Page size.
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListChangeSetsRequest {
    /// Change sets of the AWS Marketplace catalog.
    pub fn new() -> Self {
        Self {
            catalog: AWS_MARKETPLACE_CATALOG.to_string(),
            filter_list: Vec::new(),
            sort: None,
            max_results: None,
            next_token: None,
        }
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter_list.push(filter);
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
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

impl Default for ListChangeSetsRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Input for `ListEntities`.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntitiesRequest {
    /// Catalog name.
    #[serde(rename = "Catalog")]
    pub catalog: String,
    /// Entity type, such as `ContainerProduct`.
    #[serde(rename = "EntityType")]
    pub entity_type: String,
    /// Filters.
    #[serde(rename = "FilterList", skip_serializing_if = "Vec::is_empty")]
    pub filter_list: Vec<Filter>,
    /// Sort order.
    #[serde(rename = "Sort", skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    /// Page size.
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Continuation token.
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListEntitiesRequest {
    /// Entities of a type in the AWS Marketplace catalog.
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            catalog: AWS_MARKETPLACE_CATALOG.to_string(),
            entity_type: entity_type.into(),
            filter_list: Vec::new(),
            sort: None,
            max_results: None,
            next_token: None,
        }
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter_list.push(filter);
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_details_encoded_as_string() {
        let change = Change::new(
            "UpdateInformation",
            Entity::existing("ServerProduct@1.0", "prod-1"),
            &serde_json::json!({ "ProductTitle": "Widget" }),
        )
        .unwrap();

        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["Details"], r#"{"ProductTitle":"Widget"}"#);
        assert_eq!(json["Entity"]["Identifier"], "prod-1");
        assert!(json.get("ChangeName").is_none());
    }

    #[test]
    fn test_list_defaults_to_marketplace_catalog() {
        let json = serde_json::to_value(ListChangeSetsRequest::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "Catalog": "AWSMarketplace" }));
    }
}
