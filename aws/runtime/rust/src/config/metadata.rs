//! Static per-service metadata.

use crate::protocol::Protocol;

/// Constants describing how to reach and sign for one AWS service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Human-readable service name used in logs.
    pub service_name: &'static str,
    /// Signature V4 signing name.
    pub signing_name: &'static str,
    /// Hostname prefix, e.g. `catalog.marketplace`.
    pub endpoint_prefix: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
    /// `X-Amz-Target` prefix for JSON-RPC services.
    pub target_prefix: Option<&'static str>,
    /// API version string.
    pub api_version: &'static str,
    /// Suffix of the `AWS_ENDPOINT_URL_<SUFFIX>` override variable.
    pub env_suffix: &'static str,
}

impl ServiceMetadata {
    /// Name of the per-service endpoint override variable.
    pub fn endpoint_env_var(&self) -> String {
        format!("AWS_ENDPOINT_URL_{}", self.env_suffix)
    }

    /// Default regional hostname.
    pub fn default_host(&self, region: &str) -> String {
        let dns_suffix = if region.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        format!("{}.{}.{}", self.endpoint_prefix, region, dns_suffix)
    }
}
