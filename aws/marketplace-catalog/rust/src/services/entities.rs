//! Entity operations.

use super::require;
use crate::error::MarketplaceCatalogError;
use crate::types::*;
use aws_runtime::{Method, OperationRequest, ServiceClient};
use std::sync::Arc;

/// Service for reading catalog entities such as products and offers.
pub struct EntitiesService {
    client: Arc<ServiceClient>,
}

impl EntitiesService {
    /// Create a new entities service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Describe an entity.
    pub async fn describe_entity(
        &self,
        catalog: &str,
        entity_id: &str,
    ) -> Result<DescribeEntityOutput, MarketplaceCatalogError> {
        require("Catalog", catalog)?;
        require("EntityId", entity_id)?;
        let op = OperationRequest::rest("DescribeEntity", Method::Get, "/DescribeEntity")
            .with_query("catalog", catalog)
            .with_query("entityId", entity_id);

        Ok(self.client.invoke_json(op).await?)
    }

    /// List entities of a type.
    pub async fn list_entities(
        &self,
        request: ListEntitiesRequest,
    ) -> Result<ListEntitiesOutput, MarketplaceCatalogError> {
        require("Catalog", &request.catalog)?;
        require("EntityType", &request.entity_type)?;
        let op = OperationRequest::rest("ListEntities", Method::Post, "/ListEntities")
            .with_json_body(&request)?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// List every entity matching the request, following pagination.
    pub async fn list_all_entities(
        &self,
        request: ListEntitiesRequest,
    ) -> Result<Vec<EntitySummary>, MarketplaceCatalogError> {
        let mut request = request;
        let mut entities = Vec::new();
        loop {
            let page = self.list_entities(request.clone()).await?;
            entities.extend(page.entity_summary_list);
            match page.next_token {
                Some(token) if !token.is_empty() => request.next_token = Some(token),
                _ => return Ok(entities),
            }
        }
    }
}
