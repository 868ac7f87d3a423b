//! Shared invoke pipeline.
//!
//! [`ServiceClient`] is the only place where requests are signed, sent and
//! retried. Service crates marshal an [`OperationRequest`] and pick one of
//! the `invoke_*` helpers according to the operation's output shape.

use crate::config::{ServiceConfig, ServiceMetadata};
use crate::error::{parse_service_error, AwsError};
use crate::protocol::{decode_json, OperationRequest, Protocol};
use crate::resilience::RetryPolicy;
use crate::signing::{AwsSigner, SigV4Signer};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, trace};
use url::Url;

/// Raw response payload with its media type.
#[derive(Debug, Clone)]
pub struct Payload {
    /// Value of the `Content-Type` response header.
    pub content_type: Option<String>,
    /// Response body.
    pub body: Bytes,
}

/// Client bound to one AWS service.
pub struct ServiceClient {
    config: ServiceConfig,
    metadata: ServiceMetadata,
    endpoint: Url,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn AwsSigner>,
    retry: RetryPolicy,
}

impl ServiceClient {
    /// Create a client from explicit parts.
    pub fn new(
        config: ServiceConfig,
        metadata: ServiceMetadata,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<dyn AwsSigner>,
    ) -> Result<Self, AwsError> {
        let endpoint = config.resolve_endpoint(&metadata)?;
        Ok(Self::with_endpoint(config, metadata, endpoint, transport, signer))
    }

    /// Create a client for an already resolved endpoint.
    pub fn with_endpoint(
        config: ServiceConfig,
        metadata: ServiceMetadata,
        endpoint: Url,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<dyn AwsSigner>,
    ) -> Self {
        let retry = RetryPolicy::new(config.retry_config());

        debug!(
            service = metadata.service_name,
            endpoint = %endpoint,
            region = %config.region,
            "Created service client"
        );

        Self {
            config,
            metadata,
            endpoint,
            transport,
            signer,
            retry,
        }
    }

    /// Create a client that signs with SigV4 using the config's credentials.
    ///
    /// A reqwest transport is built from the config when none is given.
    pub fn from_config(
        config: ServiceConfig,
        metadata: ServiceMetadata,
        transport: Option<Arc<dyn HttpTransport>>,
    ) -> Result<Self, AwsError> {
        let transport = match transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::from_config(&config)?),
        };
        let signer = Arc::new(SigV4Signer::new(
            config.credentials_provider.clone(),
            config.region.clone(),
            metadata.signing_name,
        ));
        Self::new(config, metadata, transport, signer)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get the service metadata.
    pub fn metadata(&self) -> &ServiceMetadata {
        &self.metadata
    }

    /// Get the resolved base endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send an operation and return the successful HTTP response.
    ///
    /// Non-2xx responses become [`AwsError::Service`]. Transient failures are
    /// retried, and every attempt is signed again.
    #[instrument(
        skip(self, request),
        fields(service = self.metadata.service_name, operation = request.operation)
    )]
    pub async fn invoke(&self, request: OperationRequest) -> Result<HttpResponse, AwsError> {
        let url = request.url(&self.endpoint)?;
        let started = Instant::now();

        let result = self
            .retry
            .execute(|| self.send_once(&request, &url))
            .await;

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            success = result.is_ok(),
            "Operation finished"
        );

        result
    }

    /// Invoke and decode a JSON output.
    pub async fn invoke_json<T: DeserializeOwned>(
        &self,
        request: OperationRequest,
    ) -> Result<T, AwsError> {
        let operation = request.operation;
        let response = self.invoke(request).await?;
        decode_json(operation, &response)
    }

    /// Invoke an operation with no modelled output.
    pub async fn invoke_empty(&self, request: OperationRequest) -> Result<(), AwsError> {
        self.invoke(request).await.map(|_| ())
    }

    /// Invoke an operation whose output is the raw body.
    pub async fn invoke_payload(&self, request: OperationRequest) -> Result<Payload, AwsError> {
        let response = self.invoke(request).await?;
        Ok(Payload {
            content_type: response.content_type().map(String::from),
            body: response.body,
        })
    }

    async fn send_once(
        &self,
        request: &OperationRequest,
        url: &Url,
    ) -> Result<HttpResponse, AwsError> {
        let mut headers = request.headers.clone();
        let has_content_type = headers
            .keys()
            .any(|k| k.eq_ignore_ascii_case("content-type"));
        if !has_content_type
            && (request.body.is_some() || self.metadata.protocol != Protocol::RestJson1)
        {
            headers.insert(
                "content-type".to_string(),
                self.metadata.protocol.content_type().to_string(),
            );
        }

        let body = request.body.as_deref();
        let method = request.method.as_str();
        let signed = match &request.credentials {
            Some(credentials) => {
                self.signer
                    .sign_with_credentials(credentials, method, url, &headers, body)
                    .await?
            }
            None => self.signer.sign(method, url, &headers, body).await?,
        };

        let mut http_request =
            HttpRequest::new(method, signed.url.as_str()).with_headers(signed.headers);
        if let Some(body) = &request.body {
            http_request = http_request.with_body(body.clone());
        }

        trace!(method = method, url = %url, "Sending request");
        let response = self.transport.send(http_request).await?;
        trace!(status = response.status, "Received response");

        if !response.is_success() {
            let error = parse_service_error(&response);
            debug!(
                status = error.status,
                code = %error.code,
                request_id = ?error.request_id,
                "Service returned error"
            );
            return Err(AwsError::Service(error));
        }

        Ok(response)
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.metadata.service_name)
            .field("endpoint", &self.endpoint.as_str())
            .field("region", &self.config.region)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::AwsCredentials;
    use crate::error::ResponseError;
    use crate::mocks::{MockResponse, MockSigner, MockTransport};
    use crate::protocol::Method;
    use serde::Deserialize;

    const LEDGERS: ServiceMetadata = ServiceMetadata {
        service_name: "QLDB",
        signing_name: "qldb",
        endpoint_prefix: "qldb",
        protocol: Protocol::RestJson1,
        target_prefix: None,
        api_version: "2019-01-02",
        env_suffix: "RT_CLIENT_TEST_QLDB",
    };

    const HOSTS: ServiceMetadata = ServiceMetadata {
        service_name: "CodeStar Connections",
        signing_name: "codestar-connections",
        endpoint_prefix: "codestar-connections",
        protocol: Protocol::AwsJson1_0,
        target_prefix: Some("com.amazonaws.codestar.connections.CodeStar_connections_20191201"),
        api_version: "2019-12-01",
        env_suffix: "RT_CLIENT_TEST_CODESTAR",
    };

    fn client(metadata: ServiceMetadata, transport: Arc<MockTransport>) -> ServiceClient {
        let config = ServiceConfig::builder()
            .region("us-east-1")
            .initial_backoff(std::time::Duration::from_millis(1))
            .max_backoff(std::time::Duration::from_millis(2))
            .build()
            .unwrap();
        ServiceClient::new(config, metadata, transport, Arc::new(MockSigner::new())).unwrap()
    }

    #[derive(Debug, Deserialize)]
    struct Ledger {
        #[serde(rename = "Name")]
        name: String,
    }

    #[tokio::test]
    async fn test_invoke_json_rest() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
            200,
            r#"{"Name":"books","State":"ACTIVE"}"#,
        )]));
        let client = client(LEDGERS, transport.clone());

        let ledger: Ledger = client
            .invoke_json(OperationRequest::rest("DescribeLedger", Method::Get, "/ledgers/books"))
            .await
            .unwrap();
        assert_eq!(ledger.name, "books");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.url, "https://qldb.us-east-1.amazonaws.com/ledgers/books");
        assert!(request.get_header("content-type").is_none());
        assert!(request.get_header("authorization").is_some());
    }

    #[tokio::test]
    async fn test_json_rpc_headers() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
            200,
            r#"{"Hosts":[]}"#,
        )]));
        let client = client(HOSTS, transport.clone());

        let op = OperationRequest::json_rpc(&HOSTS, "ListHosts", &()).unwrap();
        client.invoke_empty(op).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(
            request.get_header("content-type"),
            Some("application/x-amz-json-1.0")
        );
        assert_eq!(
            request.get_header("x-amz-target"),
            Some("com.amazonaws.codestar.connections.CodeStar_connections_20191201.ListHosts")
        );
        assert_eq!(request.body_str(), Some("{}"));
    }

    #[tokio::test]
    async fn test_service_error_is_returned() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::aws_error(
            404,
            "ResourceNotFoundException",
            "Ledger books not found",
        )]));
        let client = client(LEDGERS, transport.clone());

        let result = client
            .invoke_empty(OperationRequest::rest("DeleteLedger", Method::Delete, "/ledgers/books"))
            .await;

        match result {
            Err(AwsError::Service(err)) => {
                assert_eq!(err.code, "ResourceNotFoundException");
                assert_eq!(err.status, 404);
            }
            other => panic!("expected service error, got {:?}", other),
        }
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_throttling_is_retried() {
        let transport = Arc::new(MockTransport::with_responses(vec![
            MockResponse::aws_error(400, "ThrottlingException", "Rate exceeded"),
            MockResponse::error(503, "unavailable"),
            MockResponse::json(200, r#"{"Name":"books"}"#),
        ]));
        let client = client(LEDGERS, transport.clone());

        let ledger: Ledger = client
            .invoke_json(OperationRequest::rest("DescribeLedger", Method::Get, "/ledgers/books"))
            .await
            .unwrap();

        assert_eq!(ledger.name, "books");
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_credentials_override_used() {
        let transport = Arc::new(MockTransport::with_default(MockResponse::no_content()));
        let client = client(LEDGERS, transport.clone());

        let op = OperationRequest::rest("DeleteLedger", Method::Delete, "/ledgers/books")
            .with_credentials(Some(AwsCredentials::new("AKIDOVERRIDE", "secret")));
        client.invoke_empty(op).await.unwrap();

        let request = transport.last_request().unwrap();
        assert!(request
            .get_header("authorization")
            .unwrap()
            .contains("AKIDOVERRIDE"));
    }

    #[tokio::test]
    async fn test_invoke_payload() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok_with_body(
            b"\x00\x00\x00\x1cftypmp42".to_vec(),
        )
        .with_header("Content-Type", "video/mp4")]));
        let client = client(LEDGERS, transport);

        let payload = client
            .invoke_payload(OperationRequest::rest("GetClip", Method::Post, "/getClip"))
            .await
            .unwrap();
        assert_eq!(payload.content_type.as_deref(), Some("video/mp4"));
        assert_eq!(payload.body.len(), 12);
    }

    #[tokio::test]
    async fn test_decode_failure() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
            200, "[1,2,3]",
        )]));
        let client = client(LEDGERS, transport);

        let result: Result<Ledger, AwsError> = client
            .invoke_json(OperationRequest::rest("DescribeLedger", Method::Get, "/ledgers/x"))
            .await;
        assert!(matches!(
            result,
            Err(AwsError::Response(ResponseError::Deserialization { .. }))
        ));
    }
}
