//! Mock signer for testing.

use crate::credentials::AwsCredentials;
use crate::error::AwsError;
use crate::signing::{AwsSigner, SignedRequest};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

const MOCK_ACCESS_KEY: &str = "AKIDMOCK";

/// Recorded sign request.
#[derive(Debug, Clone)]
pub struct SignRequest {
    /// HTTP method.
    pub method: String,
    /// Request URL.
    pub url: Url,
    /// Headers passed to the signer.
    pub headers: HashMap<String, String>,
    /// Whether a body was supplied.
    pub has_body: bool,
    /// Access key of override credentials, if any.
    pub override_access_key: Option<String>,
}

/// Signer that adds fixed headers instead of computing a signature.
pub struct MockSigner {
    error: Mutex<Option<AwsError>>,
    sign_count: AtomicUsize,
    sign_requests: Mutex<Vec<SignRequest>>,
}

impl MockSigner {
    /// Create a new mock signer.
    pub fn new() -> Self {
        Self {
            error: Mutex::new(None),
            sign_count: AtomicUsize::new(0),
            sign_requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock signer whose next call fails.
    pub fn with_error(error: AwsError) -> Self {
        let signer = Self::new();
        *signer.error.lock() = Some(error);
        signer
    }

    /// Get the number of sign calls.
    pub fn sign_count(&self) -> usize {
        self.sign_count.load(Ordering::Relaxed)
    }

    /// Get the last sign request.
    pub fn last_sign_request(&self) -> Option<SignRequest> {
        self.sign_requests.lock().last().cloned()
    }

    fn record(
        &self,
        access_key: &str,
        override_access_key: Option<String>,
        method: &str,
        url: &Url,
        headers: &HashMap<String, String>,
        body: Option<&[u8]>,
    ) -> Result<SignedRequest, AwsError> {
        self.sign_count.fetch_add(1, Ordering::Relaxed);
        self.sign_requests.lock().push(SignRequest {
            method: method.to_string(),
            url: url.clone(),
            headers: headers.clone(),
            has_body: body.is_some(),
            override_access_key,
        });

        if let Some(error) = self.error.lock().take() {
            return Err(error);
        }

        let mut signed_headers = headers.clone();
        signed_headers.insert(
            "authorization".to_string(),
            format!(
                "AWS4-HMAC-SHA256 Credential={}/20240115/us-east-1/mock/aws4_request, SignedHeaders=host, Signature=mock",
                access_key
            ),
        );
        signed_headers.insert("x-amz-date".to_string(), "20240115T100000Z".to_string());

        Ok(SignedRequest {
            method: method.to_string(),
            url: url.clone(),
            headers: signed_headers,
        })
    }
}

impl Default for MockSigner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AwsSigner for MockSigner {
    async fn sign(
        &self,
        method: &str,
        url: &Url,
        headers: &HashMap<String, String>,
        body: Option<&[u8]>,
    ) -> Result<SignedRequest, AwsError> {
        self.record(MOCK_ACCESS_KEY, None, method, url, headers, body)
    }

    async fn sign_with_credentials(
        &self,
        credentials: &AwsCredentials,
        method: &str,
        url: &Url,
        headers: &HashMap<String, String>,
        body: Option<&[u8]>,
    ) -> Result<SignedRequest, AwsError> {
        let key = credentials.access_key_id();
        self.record(key, Some(key.to_string()), method, url, headers, body)
    }
}

impl std::fmt::Debug for MockSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSigner")
            .field("sign_count", &self.sign_count())
            .finish()
    }
}
