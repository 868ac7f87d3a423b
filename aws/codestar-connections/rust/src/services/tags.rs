//! Resource tagging.

use super::{require, rpc};
use crate::error::CodeStarConnectionsError;
use crate::types::*;
use aws_runtime::{AwsError, ServiceClient};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct ResourceRef<'a> {
    #[serde(rename = "ResourceArn")]
    resource_arn: &'a str,
}

#[derive(Serialize)]
struct TagBody<'a> {
    #[serde(rename = "ResourceArn")]
    resource_arn: &'a str,
    #[serde(rename = "Tags")]
    tags: &'a [Tag],
}

#[derive(Serialize)]
struct UntagBody<'a> {
    #[serde(rename = "ResourceArn")]
    resource_arn: &'a str,
    #[serde(rename = "TagKeys")]
    tag_keys: Vec<&'a str>,
}

/// Service for tags on connections and hosts.
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
    ) -> Result<ListTagsForResourceOutput, CodeStarConnectionsError> {
        require("ResourceArn", resource_arn)?;
        let op = rpc("ListTagsForResource", &ResourceRef { resource_arn })?;

        Ok(self.client.invoke_json(op).await?)
    }

    /// Add or overwrite tags.
    pub async fn tag_resource(
        &self,
        resource_arn: &str,
        tags: &[Tag],
    ) -> Result<(), CodeStarConnectionsError> {
        require("ResourceArn", resource_arn)?;
        if tags.is_empty() {
            return Err(AwsError::validation("Tags must not be empty").into());
        }
        let op = rpc("TagResource", &TagBody { resource_arn, tags })?;

        Ok(self.client.invoke_empty(op).await?)
    }

    /// Remove tags by key.
    pub async fn untag_resource<K: AsRef<str>>(
        &self,
        resource_arn: &str,
        tag_keys: &[K],
    ) -> Result<(), CodeStarConnectionsError> {
        require("ResourceArn", resource_arn)?;
        if tag_keys.is_empty() {
            return Err(AwsError::validation("TagKeys must not be empty").into());
        }
        let op = rpc(
            "UntagResource",
            &UntagBody {
                resource_arn,
                tag_keys: tag_keys.iter().map(|k| k.as_ref()).collect(),
            },
        )?;

        Ok(self.client.invoke_empty(op).await?)
    }
}
