//! Currency rate provider abstraction

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::ProviderError;
use super::rate::Rate;

/// A remote source that turns a base/quote pair into a rate.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Performs one request, bounded by `timeout`, and reports why it failed.
    async fn request_rate(
        &self,
        base: &str,
        quote: &str,
        timeout: Duration,
    ) -> Result<Rate, ProviderError>;

    /// Like [`RateProvider::request_rate`] but every failure collapses to `None`.
    ///
    /// The cause is logged and then discarded.
    async fn fetch_rate(&self, base: &str, quote: &str, timeout: Duration) -> Option<Rate> {
        let attempt = tokio::time::timeout(timeout, self.request_rate(base, quote, timeout))
            .await
            .unwrap_or_else(|_| Err(ProviderError::Timeout(timeout)));

        match attempt {
            Ok(rate) => {
                debug!(
                    provider = self.name(),
                    %base,
                    %quote,
                    rate = rate.value(),
                    "Provider returned rate"
                );
                Some(rate)
            }
            Err(e) => {
                warn!(
                    provider = self.name(),
                    %base,
                    %quote,
                    error = %e,
                    "Provider failed, no rate"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StallingProvider;

    #[async_trait]
    impl RateProvider for StallingProvider {
        fn name(&self) -> &str {
            "stalling"
        }

        async fn request_rate(
            &self,
            _base: &str,
            _quote: &str,
            _timeout: Duration,
        ) -> Result<Rate, ProviderError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Rate::new(1.0).unwrap())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl RateProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn request_rate(
            &self,
            _base: &str,
            _quote: &str,
            _timeout: Duration,
        ) -> Result<Rate, ProviderError> {
            Err(ProviderError::Decode("missing quote NPR".to_string()))
        }
    }

    #[tokio::test]
    async fn test_fetch_rate_enforces_timeout() {
        let start = std::time::Instant::now();
        let rate = StallingProvider
            .fetch_rate("AUD", "NPR", Duration::from_millis(50))
            .await;
        assert!(rate.is_none());
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_fetch_rate_swallows_errors() {
        let rate = FailingProvider
            .fetch_rate("AUD", "NPR", Duration::from_secs(8))
            .await;
        assert!(rate.is_none());
    }
}
