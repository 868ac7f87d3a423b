//! Retry policy with exponential backoff.

use crate::error::AwsError;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry configuration.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier for exponential backoff.
    pub backoff_multiplier: f64,
    /// Add jitter to backoff.
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(20),
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration with custom values.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Set the initial backoff duration.
    pub fn with_initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set the maximum backoff duration.
    pub fn with_max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Set the backoff multiplier.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Enable or disable jitter.
    pub fn with_jitter(mut self, use_jitter: bool) -> Self {
        self.use_jitter = use_jitter;
        self
    }

    /// Create a no-retry configuration.
    pub fn no_retry() -> Self {
        Self::new(0)
    }
}

/// Retry policy that executes operations with exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a new retry policy with the given configuration.
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Execute an operation, retrying while the error is retryable.
    ///
    /// The closure is invoked once per attempt, so each attempt builds and
    /// signs a fresh request.
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T, AwsError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, AwsError>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => {
                    if attempt > 0 {
                        debug!(attempt = attempt, "Operation succeeded after retry");
                    }
                    return Ok(result);
                }
                Err(error) => {
                    if !error.is_retryable() || attempt >= self.config.max_retries {
                        if attempt > 0 {
                            warn!(
                                attempt = attempt,
                                max_retries = self.config.max_retries,
                                error = %error,
                                "Operation failed after all retries"
                            );
                        }
                        return Err(error);
                    }

                    let backoff = self.calculate_backoff(attempt);
                    warn!(
                        attempt = attempt + 1,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %error,
                        "Retrying operation after backoff"
                    );

                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Calculate backoff duration for a given attempt.
    fn calculate_backoff(&self, attempt: u32) -> Duration {
        let base = self.config.initial_backoff.as_millis() as f64;
        let multiplied = base * self.config.backoff_multiplier.powi(attempt as i32);
        let capped = multiplied.min(self.config.max_backoff.as_millis() as f64);

        let final_ms = if self.config.use_jitter {
            // Equal jitter: half fixed, half random.
            let jitter: f64 = rand::thread_rng().gen_range(0.0..=1.0);
            capped * (0.5 + jitter * 0.5)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }

    /// Get the retry configuration.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NetworkError, ServiceError};
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_config(max_retries: u32) -> RetryConfig {
        RetryConfig::new(max_retries)
            .with_initial_backoff(Duration::from_millis(1))
            .with_max_backoff(Duration::from_millis(2))
            .with_jitter(false)
    }

    #[test]
    fn test_config_builder() {
        let config = RetryConfig::new(5)
            .with_initial_backoff(Duration::from_millis(200))
            .with_max_backoff(Duration::from_secs(60))
            .with_multiplier(3.0)
            .with_jitter(false);

        assert_eq!(config.max_retries, 5);
        assert_eq!(config.initial_backoff, Duration::from_millis(200));
        assert_eq!(config.backoff_multiplier, 3.0);
        assert!(!config.use_jitter);
        assert_eq!(RetryConfig::no_retry().max_retries, 0);
    }

    #[test]
    fn test_backoff_calculation() {
        let policy = RetryPolicy::new(
            RetryConfig::new(3)
                .with_initial_backoff(Duration::from_millis(100))
                .with_multiplier(2.0)
                .with_jitter(false),
        );

        assert_eq!(policy.calculate_backoff(0), Duration::from_millis(100));
        assert_eq!(policy.calculate_backoff(1), Duration::from_millis(200));
        assert_eq!(policy.calculate_backoff(2), Duration::from_millis(400));
    }

    #[test]
    fn test_backoff_capped() {
        let policy = RetryPolicy::new(
            RetryConfig::new(10)
                .with_initial_backoff(Duration::from_secs(1))
                .with_max_backoff(Duration::from_secs(5))
                .with_multiplier(10.0)
                .with_jitter(false),
        );

        assert_eq!(policy.calculate_backoff(5), Duration::from_secs(5));
    }

    #[test]
    fn test_backoff_jitter_bounds() {
        let policy = RetryPolicy::new(
            RetryConfig::new(3)
                .with_initial_backoff(Duration::from_millis(1000))
                .with_jitter(true),
        );

        for _ in 0..50 {
            let backoff = policy.calculate_backoff(0);
            assert!(backoff >= Duration::from_millis(500));
            assert!(backoff <= Duration::from_millis(1000));
        }
    }

    #[tokio::test]
    async fn test_retry_success_first_attempt() {
        let policy = RetryPolicy::new(RetryConfig::default());
        let result: Result<i32, AwsError> = policy.execute(|| async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_retry_until_success() {
        let policy = RetryPolicy::new(fast_config(3));
        let calls = AtomicU32::new(0);

        let result = policy
            .execute(|| async {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(AwsError::Network(NetworkError::ConnectionFailed {
                        message: "reset".to_string(),
                    }))
                } else {
                    Ok("done")
                }
            })
            .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max() {
        let policy = RetryPolicy::new(fast_config(2));
        let calls = AtomicU32::new(0);

        let result: Result<(), AwsError> = policy
            .execute(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AwsError::Service(ServiceError::new(
                    "ThrottlingException",
                    "Rate exceeded",
                    400,
                )))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_non_retryable_error() {
        let policy = RetryPolicy::new(fast_config(3));
        let calls = AtomicU32::new(0);

        let result: Result<(), AwsError> = policy
            .execute(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AwsError::Service(ServiceError::new(
                    "ValidationException",
                    "bad input",
                    400,
                )))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
