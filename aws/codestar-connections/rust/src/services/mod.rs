//! Service implementations for CodeStar Connections operations.
//!
//! Every operation is a JSON-RPC call: `POST /` with the operation named in
//! `X-Amz-Target`.

mod connections;
mod hosts;
mod tags;

pub use connections::ConnectionsService;
pub use hosts::HostsService;
pub use tags::TagsService;

use crate::client::METADATA;
use aws_runtime::{AwsError, OperationRequest};
use serde::Serialize;

pub(crate) fn rpc<T: Serialize>(
    operation: &'static str,
    input: &T,
) -> Result<OperationRequest, AwsError> {
    OperationRequest::json_rpc(&METADATA, operation, input)
}

/// Reject an empty required member before any I/O.
pub(crate) fn require(member: &str, value: &str) -> Result<(), AwsError> {
    if value.is_empty() {
        return Err(AwsError::validation(format!("{} must not be empty", member)));
    }
    Ok(())
}

#[derive(Serialize)]
pub(crate) struct ConnectionRef<'a> {
    #[serde(rename = "ConnectionArn")]
    pub connection_arn: &'a str,
}

#[derive(Serialize)]
pub(crate) struct HostRef<'a> {
    #[serde(rename = "HostArn")]
    pub host_arn: &'a str,
}
