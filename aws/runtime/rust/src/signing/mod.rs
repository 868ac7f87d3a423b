//! AWS Signature V4 signing implementation.
//!
//! This module implements the Signature V4 process for every JSON service:
//! canonical request creation, string to sign generation, and signature
//! calculation scoped to a region and a service signing name.

mod canonical;
mod signer;

pub use canonical::{uri_encode_path_segment, uri_encode_query};
pub use signer::{AwsSigner, SigV4Signer, SignedRequest};

use crate::credentials::AwsCredentials;
use crate::error::SigningError;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// AWS Signature V4 algorithm identifier.
pub const AWS_ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Region and service that a signature is scoped to.
#[derive(Debug, Clone, Copy)]
pub struct SigningScope<'a> {
    /// AWS region, e.g. `us-east-1`.
    pub region: &'a str,
    /// Service signing name, e.g. `kinesisvideo`.
    pub service: &'a str,
}

/// Calculate SHA-256 hash of data.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Calculate HMAC-SHA256.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, SigningError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| SigningError::CalculationFailed {
            message: e.to_string(),
        })?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Generate the signing key for AWS Signature V4.
///
/// kDate = HMAC("AWS4" + SecretKey, Date)
/// kRegion = HMAC(kDate, Region)
/// kService = HMAC(kRegion, Service)
/// kSigning = HMAC(kService, "aws4_request")
pub fn derive_signing_key(
    secret_key: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>, SigningError> {
    let k_secret = format!("AWS4{}", secret_key);
    let k_date = hmac_sha256(k_secret.as_bytes(), date_stamp.as_bytes())?;
    let k_region = hmac_sha256(&k_date, region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, service.as_bytes())?;
    hmac_sha256(&k_service, b"aws4_request")
}

/// Build the credential scope string.
///
/// Format: `{date}/{region}/{service}/aws4_request`
pub fn build_credential_scope(date_stamp: &str, region: &str, service: &str) -> String {
    format!("{}/{}/{}/aws4_request", date_stamp, region, service)
}

/// Format a timestamp as `YYYYMMDD'T'HHMMSS'Z'`.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Format a date stamp as `YYYYMMDD`.
pub fn format_date_stamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%d").to_string()
}

/// Check if a header takes part in the signature.
pub fn should_sign_header(header_name: &str) -> bool {
    let name_lower = header_name.to_lowercase();

    name_lower == "host"
        || name_lower.starts_with("x-amz-")
        || name_lower == "content-type"
        || name_lower == "content-md5"
}

/// Sign a request and return the Authorization header value.
#[allow(clippy::too_many_arguments)]
pub fn sign_request(
    method: &str,
    uri: &str,
    query_string: &str,
    headers: &[(String, String)],
    payload_hash: &str,
    credentials: &AwsCredentials,
    scope: SigningScope<'_>,
    timestamp: &DateTime<Utc>,
) -> Result<String, SigningError> {
    let date_stamp = format_date_stamp(timestamp);
    let amz_date = format_datetime(timestamp);

    let canonical_request =
        canonical::build_canonical_request(method, uri, query_string, headers, payload_hash);
    let canonical_request_hash = sha256_hex(canonical_request.as_bytes());

    let credential_scope = build_credential_scope(&date_stamp, scope.region, scope.service);

    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        AWS_ALGORITHM, amz_date, credential_scope, canonical_request_hash
    );

    let signing_key = derive_signing_key(
        credentials.secret_access_key(),
        &date_stamp,
        scope.region,
        scope.service,
    )?;
    let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes())?);

    Ok(format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        AWS_ALGORITHM,
        credentials.access_key_id(),
        credential_scope,
        canonical::build_signed_headers(headers),
        signature
    ))
}
