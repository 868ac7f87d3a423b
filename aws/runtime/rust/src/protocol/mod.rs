//! JSON wire protocols.
//!
//! Service crates describe each call as an [`OperationRequest`]: a method,
//! a resolved path, query pairs, headers, and an optional JSON body. The
//! [`ServiceClient`](crate::client::ServiceClient) turns it into a signed
//! HTTP request.

mod path;

pub use path::resolve_path;

use crate::config::ServiceMetadata;
use crate::credentials::AwsCredentials;
use crate::error::{AwsError, RequestError, ResponseError};
use crate::signing::uri_encode_query;
use crate::transport::HttpResponse;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

/// Wire protocol spoken by a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// JSON-RPC, version 1.0.
    AwsJson1_0,
    /// JSON-RPC, version 1.1.
    AwsJson1_1,
    /// RESTful JSON.
    RestJson1,
}

impl Protocol {
    /// Content type for request bodies.
    pub fn content_type(&self) -> &'static str {
        match self {
            Protocol::AwsJson1_0 => "application/x-amz-json-1.0",
            Protocol::AwsJson1_1 => "application/x-amz-json-1.1",
            Protocol::RestJson1 => "application/json",
        }
    }

    /// True for the `X-Amz-Target` based protocols.
    pub fn is_json_rpc(&self) -> bool {
        matches!(self, Protocol::AwsJson1_0 | Protocol::AwsJson1_1)
    }
}

/// HTTP methods used by AWS JSON operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A marshalled operation, ready for the invoke pipeline.
#[derive(Debug, Clone)]
pub struct OperationRequest {
    /// Operation name, used for logging and JSON-RPC targets.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Resolved, percent-encoded request path.
    pub path: String,
    /// Query parameters, unencoded.
    pub query: Vec<(String, String)>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
    /// Serialized body.
    pub body: Option<Bytes>,
    /// Credentials that replace the client's provider for this call.
    pub credentials: Option<AwsCredentials>,
}

impl OperationRequest {
    /// Create a REST-JSON request for an already resolved path.
    pub fn rest(operation: &'static str, method: Method, path: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
            credentials: None,
        }
    }

    /// Create a JSON-RPC request: `POST /` with an `X-Amz-Target` header.
    ///
    /// Inputs that serialize to nothing are sent as `{}`.
    pub fn json_rpc<T: Serialize>(
        metadata: &ServiceMetadata,
        operation: &'static str,
        input: &T,
    ) -> Result<Self, AwsError> {
        let target_prefix = metadata.target_prefix.ok_or_else(|| {
            AwsError::validation(format!(
                "{} has no JSON-RPC target prefix",
                metadata.service_name
            ))
        })?;

        Self::rest(operation, Method::Post, "/")
            .with_header("X-Amz-Target", format!("{}.{}", target_prefix, operation))
            .with_json_body(input)
    }

    /// Serialize `input` as the JSON body.
    pub fn with_json_body<T: Serialize>(mut self, input: &T) -> Result<Self, AwsError> {
        let value = serde_json::to_value(input).map_err(RequestError::from)?;
        let bytes = match value {
            serde_json::Value::Null => Bytes::from_static(b"{}"),
            other => Bytes::from(serde_json::to_vec(&other).map_err(RequestError::from)?),
        };
        self.body = Some(bytes);
        Ok(self)
    }

    /// Add a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add a query parameter when a value is present.
    pub fn with_query_opt<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with_query(name, v),
            None => self,
        }
    }

    /// Add a repeated query parameter, one pair per value.
    pub fn with_query_list<V: ToString>(mut self, name: &str, values: &[V]) -> Self {
        for value in values {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a header when a value is present.
    pub fn with_header_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.with_header(name, v),
            None => self,
        }
    }

    /// Sign this call with the given credentials instead of the provider's.
    pub fn with_credentials(mut self, credentials: Option<AwsCredentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Build the full request URL against a base endpoint.
    pub fn url(&self, endpoint: &Url) -> Result<Url, AwsError> {
        let base = endpoint.as_str().trim_end_matches('/');
        let mut raw = format!("{}{}", base, self.path);

        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", uri_encode_query(k), uri_encode_query(v)))
                .collect::<Vec<_>>()
                .join("&");
            raw.push('?');
            raw.push_str(&query);
        }

        Url::parse(&raw).map_err(|e| {
            AwsError::Request(RequestError::InvalidUrl {
                url: raw.clone(),
                details: e.to_string(),
            })
        })
    }
}

/// Decode a JSON response body.
///
/// An empty body decodes as `{}`; members not modelled by `T` are ignored.
pub fn decode_json<T: DeserializeOwned>(
    operation: &str,
    response: &HttpResponse,
) -> Result<T, AwsError> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &response.body
    };

    serde_json::from_slice(body).map_err(|e| {
        AwsError::Response(ResponseError::Deserialization {
            operation: operation.to_string(),
            status: response.status,
            message: e.to_string(),
            body_excerpt: String::from_utf8_lossy(&response.body)
                .chars()
                .take(200)
                .collect(),
        })
    })
}
