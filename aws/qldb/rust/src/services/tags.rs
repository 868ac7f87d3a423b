//! Resource tagging.

use crate::error::QldbError;
use crate::types::*;
use aws_runtime::{resolve_path, Method, OperationRequest, ServiceClient};
use std::sync::Arc;

/// Service for tags on ledgers and journal streams.
pub struct TagsService {
    client: Arc<ServiceClient>,
}

impl TagsService {
    /// Create a new tags service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// List tags on a resource.
    pub async fn list_tags_for_resource(
        &self,
        resource_arn: &str,
    ) -> Result<ListTagsForResourceOutput, QldbError> {
        let path = resolve_path("/tags/{resourceArn}", &[("resourceArn", resource_arn)])?;
        let op = OperationRequest::rest("ListTagsForResource", Method::Get, path);

        Ok(self.client.invoke_json(op).await?)
    }

    /// Add tags to a resource.
    pub async fn tag_resource(&self, request: TagResourceRequest) -> Result<(), QldbError> {
        let path = resolve_path(
            "/tags/{resourceArn}",
            &[("resourceArn", request.resource_arn.as_str())],
        )?;
        let op =
            OperationRequest::rest("TagResource", Method::Post, path).with_json_body(&request)?;

        Ok(self.client.invoke_empty(op).await?)
    }

    /// Remove tags from a resource.
    pub async fn untag_resource<K: AsRef<str>>(
        &self,
        resource_arn: &str,
        tag_keys: &[K],
    ) -> Result<(), QldbError> {
        if tag_keys.is_empty() {
            return Err(aws_runtime::AwsError::validation("tagKeys must not be empty").into());
        }

        let path = resolve_path("/tags/{resourceArn}", &[("resourceArn", resource_arn)])?;
        let keys: Vec<&str> = tag_keys.iter().map(|k| k.as_ref()).collect();
        let op = OperationRequest::rest("UntagResource", Method::Delete, path)
            .with_query_list("tagKeys", &keys);

        Ok(self.client.invoke_empty(op).await?)
    }
}
