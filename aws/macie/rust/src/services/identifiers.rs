//! Custom data identifiers.

use super::ensure_client_token;
use crate::error::MacieError;
use crate::types::*;
use aws_runtime::{resolve_path, Method, OperationRequest, ServiceClient};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct IdsBody<'a> {
    ids: &'a [String],
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct PageBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<&'a str>,
}

/// Service for regex-based custom data identifiers.
pub struct CustomDataIdentifiersService {
    client: Arc<ServiceClient>,
}

impl CustomDataIdentifiersService {
    /// Create a new custom data identifiers service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Create a custom data identifier.
    pub async fn create_custom_data_identifier(
        &self,
        mut request: CreateCustomDataIdentifierRequest,
    ) -> Result<CreateCustomDataIdentifierOutput, MacieError> {
        ensure_client_token(&mut request.client_token);
        let op = OperationRequest::rest(
            "CreateCustomDataIdentifier",
            Method::Post,
            "/custom-data-identifiers",
        )
        .with_json_body(&request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Get several custom data identifiers at once.
    pub async fn batch_get_custom_data_identifiers(
        &self,
        ids: &[String],
    ) -> Result<BatchGetCustomDataIdentifiersOutput, MacieError> {
        let op = OperationRequest::rest(
            "BatchGetCustomDataIdentifiers",
            Method::Post,
            "/custom-data-identifiers/get",
        )
        .with_json_body(&IdsBody { ids })?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// List custom data identifiers.
    pub async fn list_custom_data_identifiers(
        &self,
        request: ListRequest,
    ) -> Result<ListCustomDataIdentifiersOutput, MacieError> {
        let op = OperationRequest::rest(
            "ListCustomDataIdentifiers",
            Method::Post,
            "/custom-data-identifiers/list",
        )
        .with_json_body(&PageBody {
            max_results: request.max_results,
            next_token: request.next_token.as_deref(),
        })?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Test a pattern against sample text without saving it.
    pub async fn test_custom_data_identifier(
        &self,
        request: TestCustomDataIdentifierRequest,
    ) -> Result<TestCustomDataIdentifierOutput, MacieError> {
        let op = OperationRequest::rest(
            "TestCustomDataIdentifier",
            Method::Post,
            "/custom-data-identifiers/test",
        )
        .with_json_body(&request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// Get a custom data identifier.
    pub async fn get_custom_data_identifier(
        &self,
        id: &str,
    ) -> Result<GetCustomDataIdentifierOutput, MacieError> {
        let path = resolve_path("/custom-data-identifiers/{id}", &[("id", id)])?;
        let op = OperationRequest::rest("GetCustomDataIdentifier", Method::Get, path);
        Ok(self.client.invoke_json(op).await?)
    }

    /// Soft-delete a custom data identifier.
    pub async fn delete_custom_data_identifier(&self, id: &str) -> Result<(), MacieError> {
        let path = resolve_path("/custom-data-identifiers/{id}", &[("id", id)])?;
        let op = OperationRequest::rest("DeleteCustomDataIdentifier", Method::Delete, path);
        Ok(self.client.invoke_empty(op).await?)
    }
}
