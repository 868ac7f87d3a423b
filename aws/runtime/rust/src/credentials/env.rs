//! Environment variable credentials provider.

use super::{AwsCredentials, CredentialsProvider};
use crate::error::{AwsError, CredentialsError};
use async_trait::async_trait;
use std::env;

/// Access key ID variable.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Secret access key variable.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Session token variable.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Credentials provider that reads from environment variables.
///
/// This provider looks for the following environment variables:
/// - `AWS_ACCESS_KEY_ID`: The access key ID
/// - `AWS_SECRET_ACCESS_KEY`: The secret access key
/// - `AWS_SESSION_TOKEN`: Optional session token for temporary credentials
#[derive(Debug, Clone, Default)]
pub struct EnvCredentialsProvider {
    access_key_var: Option<String>,
    secret_key_var: Option<String>,
    session_token_var: Option<String>,
}

impl EnvCredentialsProvider {
    /// Create a new environment credentials provider with default variable names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with custom variable names.
    pub fn with_vars(
        access_key_var: impl Into<String>,
        secret_key_var: impl Into<String>,
        session_token_var: Option<String>,
    ) -> Self {
        Self {
            access_key_var: Some(access_key_var.into()),
            secret_key_var: Some(secret_key_var.into()),
            session_token_var,
        }
    }

    fn access_key_var(&self) -> &str {
        self.access_key_var.as_deref().unwrap_or(AWS_ACCESS_KEY_ID)
    }

    fn secret_key_var(&self) -> &str {
        self.secret_key_var
            .as_deref()
            .unwrap_or(AWS_SECRET_ACCESS_KEY)
    }

    fn session_token_var(&self) -> &str {
        self.session_token_var
            .as_deref()
            .unwrap_or(AWS_SESSION_TOKEN)
    }

    fn required(&self, name: &str) -> Result<String, AwsError> {
        let value = env::var(name).map_err(|_| {
            AwsError::Credentials(CredentialsError::NotFound {
                message: format!("environment variable {} is not set", name),
            })
        })?;

        if value.is_empty() {
            return Err(AwsError::Credentials(CredentialsError::Invalid {
                message: format!("{} is empty", name),
            }));
        }

        Ok(value)
    }
}

#[async_trait]
impl CredentialsProvider for EnvCredentialsProvider {
    async fn get_credentials(&self) -> Result<AwsCredentials, AwsError> {
        let access_key_id = self.required(self.access_key_var())?;
        let secret_access_key = self.required(self.secret_key_var())?;

        let session_token = env::var(self.session_token_var())
            .ok()
            .filter(|s| !s.is_empty());

        let credentials = match session_token {
            Some(token) => {
                AwsCredentials::with_session_token(access_key_id, secret_access_key, token)
            }
            None => AwsCredentials::new(access_key_id, secret_access_key),
        };

        Ok(credentials)
    }

    fn name(&self) -> &'static str {
        "environment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names so parallel tests do not race.

    #[tokio::test]
    async fn test_env_provider_success() {
        env::set_var("RT_TEST_OK_AKID", "AKID");
        env::set_var("RT_TEST_OK_SECRET", "SECRET");

        let provider = EnvCredentialsProvider::with_vars(
            "RT_TEST_OK_AKID",
            "RT_TEST_OK_SECRET",
            Some("RT_TEST_OK_TOKEN".to_string()),
        );
        let creds = provider.get_credentials().await.unwrap();
        assert_eq!(creds.access_key_id(), "AKID");
        assert!(creds.session_token().is_none());
    }

    #[tokio::test]
    async fn test_env_provider_with_session_token() {
        env::set_var("RT_TEST_TOKEN_AKID", "AKID");
        env::set_var("RT_TEST_TOKEN_SECRET", "SECRET");
        env::set_var("RT_TEST_TOKEN_TOKEN", "TOKEN");

        let provider = EnvCredentialsProvider::with_vars(
            "RT_TEST_TOKEN_AKID",
            "RT_TEST_TOKEN_SECRET",
            Some("RT_TEST_TOKEN_TOKEN".to_string()),
        );
        let creds = provider.get_credentials().await.unwrap();
        assert_eq!(creds.session_token(), Some("TOKEN"));
    }

    #[tokio::test]
    async fn test_env_provider_missing_access_key() {
        env::remove_var("RT_TEST_MISSING_AKID");

        let provider =
            EnvCredentialsProvider::with_vars("RT_TEST_MISSING_AKID", "RT_TEST_MISSING_SECRET", None);
        match provider.get_credentials().await {
            Err(AwsError::Credentials(CredentialsError::NotFound { message })) => {
                assert!(message.contains("RT_TEST_MISSING_AKID"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_env_provider_empty_access_key() {
        env::set_var("RT_TEST_EMPTY_AKID", "");
        env::set_var("RT_TEST_EMPTY_SECRET", "SECRET");

        let provider =
            EnvCredentialsProvider::with_vars("RT_TEST_EMPTY_AKID", "RT_TEST_EMPTY_SECRET", None);
        match provider.get_credentials().await {
            Err(AwsError::Credentials(CredentialsError::Invalid { .. })) => {}
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
