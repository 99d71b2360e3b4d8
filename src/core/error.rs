//! Failure kinds for a single rate fetch

use thiserror::Error;

use super::rate::CurrencyPair;

/// Why a single provider attempt produced no rate.
///
/// These never reach the fetcher's caller; a provider reports them as absence.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("HTTP error: {0}")]
    RemoteStatus(reqwest::StatusCode),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ProviderError {
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: std::time::Duration) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(timeout)
        } else if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// The only error that crosses the fetcher boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No rate available for {pair} after trying {attempts} provider(s)")]
    Exhausted { pair: CurrencyPair, attempts: usize },
}
