//! Ordered provider fallback

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::currency::RateProvider;
use super::error::FetchError;
use super::rate::{CurrencyPair, FetchResult};

/// Per-attempt bound applied to every provider.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Tries providers in priority order and returns the first rate found.
///
/// Attempts run one after another; a provider is only called once every
/// provider before it has come back empty. Nothing is shared between calls,
/// so one `RateFetcher` can serve concurrent fetches.
#[derive(Clone)]
pub struct RateFetcher {
    providers: Vec<Arc<dyn RateProvider>>,
    timeout: Duration,
}

impl RateFetcher {
    pub fn new(providers: Vec<Arc<dyn RateProvider>>, timeout: Duration) -> Self {
        RateFetcher { providers, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    #[instrument(name = "RateFetch", skip(self), fields(base = %base, quote = %quote))]
    pub async fn fetch_rate(&self, base: &str, quote: &str) -> FetchResult {
        for provider in &self.providers {
            debug!(provider = provider.name(), "Trying provider");
            if let Some(rate) = provider.fetch_rate(base, quote, self.timeout).await {
                info!(provider = provider.name(), rate = rate.value(), "Fetched rate");
                return Ok(rate);
            }
        }

        warn!(
            attempts = self.providers.len(),
            "All providers failed for {}/{}", base, quote
        );
        Err(FetchError::Exhausted {
            pair: CurrencyPair::new(base, quote),
            attempts: self.providers.len(),
        })
    }
}
