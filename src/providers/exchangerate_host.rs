use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use super::util::get_rates;
use crate::core::{ProviderError, Rate, RateProvider};

/// exchangerate.host: asks only for the quote symbol it needs.
pub struct ExchangeRateHostProvider {
    base_url: String,
}

impl ExchangeRateHostProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateHostProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RateProvider for ExchangeRateHostProvider {
    fn name(&self) -> &str {
        "exchangerate.host"
    }

    #[instrument(name = "ExchangeRateHostFetch", skip(self, timeout), fields(base = %base, quote = %quote))]
    async fn request_rate(
        &self,
        base: &str,
        quote: &str,
        timeout: Duration,
    ) -> Result<Rate, ProviderError> {
        let url = format!("{}/latest?base={}&symbols={}", self.base_url, base, quote);
        let data = get_rates(&url, timeout).await?;
        debug!(symbols = data.rates.len(), "Received exchangerate.host rates");
        data.rate_for(quote)
    }
}
