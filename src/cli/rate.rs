use chrono::{DateTime, Local};
use tracing::debug;

use super::ui;
use crate::core::{CurrencyPair, Rate, RateFetcher};

/// One rendered snapshot: the pair, when it was fetched, and the rate if any.
#[derive(Debug, Clone)]
pub struct RateEntry {
    pub fetched_at: DateTime<Local>,
    pub pair: CurrencyPair,
    pub rate: Option<Rate>,
}

/// Runs one fetch and turns the outcome into a [`RateEntry`].
///
/// An exhausted fetch is not an error here; it becomes an entry without a rate.
pub async fn fetch_entry(fetcher: &RateFetcher, pair: &CurrencyPair) -> RateEntry {
    let rate = match fetcher.fetch_rate(&pair.base, &pair.quote).await {
        Ok(rate) => Some(rate),
        Err(e) => {
            debug!(error = %e, "Showing placeholder");
            None
        }
    };

    RateEntry {
        fetched_at: Local::now(),
        pair: pair.clone(),
        rate,
    }
}

/// Fetches once and prints the rate line.
pub async fn show_rate(fetcher: &RateFetcher, pair: &CurrencyPair) -> RateEntry {
    let spinner = ui::new_spinner(&format!("Fetching {pair}"));
    let entry = fetch_entry(fetcher, pair).await;
    spinner.finish_and_clear();

    println!("{}", ui::render_rate_line(&entry.pair, entry.rate));
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetcher::DEFAULT_TIMEOUT;

    #[tokio::test]
    async fn test_exhausted_fetch_gives_empty_entry() {
        let fetcher = RateFetcher::new(Vec::new(), DEFAULT_TIMEOUT);
        let pair = CurrencyPair::new("AUD", "NPR");

        let entry = fetch_entry(&fetcher, &pair).await;
        assert!(entry.rate.is_none());
        assert_eq!(entry.pair, pair);
    }
}
