//! Client context sent with every `PutEvents` call.
//!
//! The service identifies the app, device and SDK from a JSON document
//! carried in the `x-amz-Client-Context` header. [`ClientContextBuilder`]
//! assembles that document; [`ClientContext::to_header_value`] encodes it.

use aws_runtime::{AwsError, RequestError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use std::collections::HashMap;

/// Encoding name sent in `x-amz-Client-Context-Encoding`.
pub const BASE64_ENCODING: &str = "base64";

/// Application and install identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientInfo {
    /// Unique ID of this app install.
    pub client_id: String,
    /// Display name of the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_title: Option<String>,
    /// Version name, such as `1.4.2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version_name: Option<String>,
    /// Version code, such as `142`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version_code: Option<String>,
    /// Package name, such as `com.example.game`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_package_name: Option<String>,
}

/// Device environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Environment {
    /// Platform, such as `android` or `linux`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Device model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Device manufacturer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Platform version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    /// Locale, such as `en_US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Mobile Analytics section of `services`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MobileAnalyticsService {
    /// Mobile Analytics app ID.
    pub app_id: String,
    /// Name of the SDK sending events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_name: Option<String>,
    /// Version of the SDK sending events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<String>,
}

/// Per-service settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Services {
    /// Mobile Analytics settings.
    pub mobile_analytics: MobileAnalyticsService,
}

/// The complete client context document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientContext {
    /// App identity.
    pub client: ClientInfo,
    /// Free-form custom values.
    pub custom: HashMap<String, String>,
    /// Device environment.
    pub env: Environment,
    /// Per-service settings.
    pub services: Services,
}

impl ClientContext {
    /// Create a builder.
    pub fn builder() -> ClientContextBuilder {
        ClientContextBuilder::new()
    }

    /// Mobile Analytics app ID.
    pub fn app_id(&self) -> &str {
        &self.services.mobile_analytics.app_id
    }

    /// Serialize to the JSON document.
    pub fn to_json(&self) -> Result<String, AwsError> {
        serde_json::to_string(self).map_err(|e| RequestError::from(e).into())
    }

    /// JSON document encoded with standard base64, ready for the header.
    pub fn to_header_value(&self) -> Result<String, AwsError> {
        Ok(STANDARD.encode(self.to_json()?))
    }
}

/// Builder for [`ClientContext`].
#[derive(Debug, Clone, Default)]
pub struct ClientContextBuilder {
    client: ClientInfo,
    custom: HashMap<String, String>,
    env: Environment,
    app_id: Option<String>,
    sdk_name: Option<String>,
    sdk_version: Option<String>,
}

impl ClientContextBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the install ID (required).
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client.client_id = client_id.into();
        self
    }

    /// Set the Mobile Analytics app ID (required).
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Set the app title.
    pub fn app_title(mut self, title: impl Into<String>) -> Self {
        self.client.app_title = Some(title.into());
        self
    }

    /// Set the app version name and code.
    pub fn app_version(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.client.app_version_name = Some(name.into());
        self.client.app_version_code = Some(code.into());
        self
    }

    /// Set the app package name.
    pub fn app_package_name(mut self, package: impl Into<String>) -> Self {
        self.client.app_package_name = Some(package.into());
        self
    }

    /// Set the platform and its version.
    pub fn platform(mut self, platform: impl Into<String>, version: impl Into<String>) -> Self {
        self.env.platform = Some(platform.into());
        self.env.platform_version = Some(version.into());
        self
    }

    /// Set the device make and model.
    pub fn device(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.env.make = Some(make.into());
        self.env.model = Some(model.into());
        self
    }

    /// Set the locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.env.locale = Some(locale.into());
        self
    }

    /// Set the SDK name and version.
    pub fn sdk(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.sdk_name = Some(name.into());
        self.sdk_version = Some(version.into());
        self
    }

    /// Add a custom value.
    pub fn custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Build the context.
    pub fn build(self) -> Result<ClientContext, AwsError> {
        if self.client.client_id.is_empty() {
            return Err(AwsError::validation("client context requires a client_id"));
        }
        let app_id = match self.app_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(AwsError::validation("client context requires an app_id")),
        };

        Ok(ClientContext {
            client: self.client,
            custom: self.custom,
            env: self.env,
            services: Services {
                mobile_analytics: MobileAnalyticsService {
                    app_id,
                    sdk_name: self.sdk_name,
                    sdk_version: self.sdk_version,
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_document() {
        let context = ClientContext::builder()
            .client_id("install-1")
            .app_id("app-1")
            .app_title("Puzzle")
            .platform("linux", "6.1")
            .sdk("aws-mobile-analytics-integration", "0.1.0")
            .custom("channel", "beta")
            .build()
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&context.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "client": {"client_id": "install-1", "app_title": "Puzzle"},
                "custom": {"channel": "beta"},
                "env": {"platform": "linux", "platform_version": "6.1"},
                "services": {"mobile_analytics": {
                    "app_id": "app-1",
                    "sdk_name": "aws-mobile-analytics-integration",
                    "sdk_version": "0.1.0"
                }}
            })
        );
    }

    #[test]
    fn test_header_value_is_base64_json() {
        let context = ClientContext::builder()
            .client_id("c")
            .app_id("a")
            .build()
            .unwrap();

        let decoded = STANDARD.decode(context.to_header_value().unwrap()).unwrap();
        assert_eq!(decoded, context.to_json().unwrap().into_bytes());
    }

    #[test]
    fn test_build_requires_ids() {
        assert!(ClientContext::builder().app_id("a").build().is_err());
        assert!(ClientContext::builder().client_id("c").build().is_err());
        assert!(ClientContext::builder().client_id("c").app_id("").build().is_err());
    }
}
