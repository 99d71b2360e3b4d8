use reqwest::StatusCode;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crate::core::{ProviderError, Rate};

const USER_AGENT: &str = concat!("ratefetch/", env!("CARGO_PKG_VERSION"));

/// Payload shape shared by both providers: `{"rates": {"<CODE>": <number>, ...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct RatesResponse {
    pub rates: HashMap<String, f64>,
}

impl RatesResponse {
    /// Picks `quote` out of the decoded table.
    pub fn rate_for(&self, quote: &str) -> Result<Rate, ProviderError> {
        let value = self
            .rates
            .get(quote)
            .ok_or_else(|| ProviderError::Decode(format!("No rate for {quote} in response")))?;
        Rate::new(*value).ok_or_else(|| {
            ProviderError::Decode(format!("Invalid rate {value} for {quote} in response"))
        })
    }
}

/// Issues one GET with a fresh client and decodes a [`RatesResponse`].
///
/// Caches are bypassed and the whole exchange is bounded by `timeout`.
pub(crate) async fn get_rates(
    url: &str,
    timeout: Duration,
) -> Result<RatesResponse, ProviderError> {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Transport(e.to_string()))?;

    debug!("Requesting rates from {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ProviderError::from_reqwest(e, timeout))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ProviderError::RemoteStatus(status));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ProviderError::from_reqwest(e, timeout))?;

    serde_json::from_str(&text).map_err(|e| {
        debug!(error = ?e, response = %text, "Failed to parse rates response");
        ProviderError::Decode(format!("Failed to parse JSON response from {url}: {e}"))
    })
}
