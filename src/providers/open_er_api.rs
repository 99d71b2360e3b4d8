use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use super::util::get_rates;
use crate::core::{ProviderError, Rate, RateProvider};

// open.er-api.com returns the full table for a base; the quote is picked locally.
pub struct OpenErApiProvider {
    base_url: String,
}

impl OpenErApiProvider {
    pub fn new(base_url: &str) -> Self {
        OpenErApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RateProvider for OpenErApiProvider {
    fn name(&self) -> &str {
        "open.er-api.com"
    }

    #[instrument(name = "OpenErApiFetch", skip(self, timeout), fields(base = %base, quote = %quote))]
    async fn request_rate(
        &self,
        base: &str,
        quote: &str,
        timeout: Duration,
    ) -> Result<Rate, ProviderError> {
        let url = format!("{}/v6/latest/{}", self.base_url, base);
        let data = get_rates(&url, timeout).await?;
        debug!(symbols = data.rates.len(), "Received open.er-api rates");
        data.rate_for(quote)
    }
}
