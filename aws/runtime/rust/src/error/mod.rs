//! Error types shared by every AWS service integration.
//!
//! Errors are grouped by the stage of the call that produced them. Service
//! crates wrap [`AwsError`] in their own typed enums and route
//! [`AwsError::Service`] through a per-service lookup table.

mod parse;

pub use parse::parse_service_error;

use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Error codes that AWS services use to signal throttling.
pub const THROTTLING_CODES: &[&str] = &[
    "ThrottlingException",
    "Throttling",
    "ThrottledException",
    "TooManyRequestsException",
    "ClientLimitExceededException",
    "RequestLimitExceeded",
    "RequestThrottled",
    "RequestThrottledException",
    "ProvisionedThroughputExceededException",
    "SlowDown",
];

/// Top-level error type for the runtime.
#[derive(Debug, Error)]
pub enum AwsError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Credential-related errors.
    #[error("Credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    /// Request signing errors.
    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    /// Request construction and validation errors.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Network and transport errors.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response decoding errors.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Error response returned by the service.
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

impl AwsError {
    /// Returns true if the error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            AwsError::Network(e) => e.is_retryable(),
            AwsError::Service(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Returns the HTTP status code if the service responded.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AwsError::Service(e) => Some(e.status),
            AwsError::Response(ResponseError::Deserialization { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Returns the AWS request ID if available.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            AwsError::Service(e) => e.request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns the AWS error code if the service responded with one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            AwsError::Service(e) => Some(e.code.as_str()),
            _ => None,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AwsError::Request(RequestError::Validation {
            message: message.into(),
        })
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Missing required region configuration.
    #[error("Missing region: region must be specified via config or environment")]
    MissingRegion,

    /// Region contains characters that cannot form a hostname.
    #[error("Invalid region: '{region}'")]
    InvalidRegion {
        /// The rejected region.
        region: String,
    },

    /// Invalid endpoint URL.
    #[error("Invalid endpoint URL: {url} ({details})")]
    InvalidEndpoint {
        /// The invalid URL.
        url: String,
        /// Details about the validation error.
        details: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {field} - {message}")]
    InvalidConfiguration {
        /// The configuration field name.
        field: String,
        /// Error message.
        message: String,
    },
}

/// Credential-related errors.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// No credentials could be found.
    #[error("Credentials not found: {message}")]
    NotFound {
        /// Where the lookup failed.
        message: String,
    },

    /// Credentials have expired.
    #[error("Credentials expired: session credentials expired at {expiration}")]
    Expired {
        /// When the credentials expired.
        expiration: String,
    },

    /// Credentials are invalid.
    #[error("Invalid credentials: {message}")]
    Invalid {
        /// Details about why credentials are invalid.
        message: String,
    },
}

/// Signature V4 errors.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The request URL cannot be signed.
    #[error("Invalid URL for signing: {message}")]
    InvalidUrl {
        /// Details about the URL problem.
        message: String,
    },

    /// Signature calculation failed.
    #[error("Signature calculation failed: {message}")]
    CalculationFailed {
        /// Details about the calculation error.
        message: String,
    },
}

/// Request construction and validation errors.
#[derive(Debug, Error)]
pub enum RequestError {
    /// A request member failed client-side validation.
    #[error("Validation error: {message}")]
    Validation {
        /// Details about the validation error.
        message: String,
    },

    /// A path template label had no value.
    #[error("Missing path parameter '{name}'")]
    MissingPathParameter {
        /// The template label.
        name: String,
    },

    /// The request body could not be serialized.
    #[error("Serialization failed: {message}")]
    Serialization {
        /// Serializer error message.
        message: String,
    },

    /// The request URL could not be built.
    #[error("Invalid request URL '{url}': {details}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Parser error message.
        details: String,
    },
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Network and transport errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection failed.
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message.
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out after {duration:?}")]
    Timeout {
        /// The timeout duration.
        duration: Duration,
    },

    /// TLS setup failed.
    #[error("TLS error: {message}")]
    TlsError {
        /// Error message.
        message: String,
    },
}

impl NetworkError {
    /// Returns true if the error is retryable.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, NetworkError::TlsError { .. })
    }
}

/// Response decoding errors.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The body did not match the expected shape.
    #[error("Failed to decode {operation} response: {message}")]
    Deserialization {
        /// Operation whose output failed to decode.
        operation: String,
        /// HTTP status of the response.
        status: u16,
        /// Decoder error message.
        message: String,
        /// First bytes of the offending body.
        body_excerpt: String,
    },

    /// The response was structurally invalid.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },
}

/// An error response returned by an AWS service.
///
/// `members` keeps every body member other than the code and message so
/// service crates can surface modelled extras such as `ResourceType`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceError {
    /// Error code with any namespace prefix removed.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// HTTP status code.
    pub status: u16,
    /// AWS request ID.
    pub request_id: Option<String>,
    /// Remaining members of the error body.
    pub members: Map<String, Value>,
}

impl ServiceError {
    /// Create a service error with no extra members.
    pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status,
            request_id: None,
            members: Map::new(),
        }
    }

    /// Set the request ID.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add a body member.
    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name.into(), value.into());
        self
    }

    /// Look up a string member, accepting either PascalCase or camelCase spelling.
    pub fn member_str(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.members.get(name).and_then(Value::as_str) {
            return Some(value);
        }
        let mut chars = name.chars();
        let alternate: String = match chars.next() {
            Some(first) if first.is_uppercase() => {
                first.to_lowercase().chain(chars).collect()
            }
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => return None,
        };
        self.members.get(&alternate).and_then(Value::as_str)
    }

    /// Returns true if the code or status indicates throttling.
    pub fn is_throttling(&self) -> bool {
        self.status == 429 || THROTTLING_CODES.contains(&self.code.as_str())
    }

    /// Returns true if the error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.is_throttling() || self.status >= 500
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.code, self.status)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " [request id: {}]", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}
