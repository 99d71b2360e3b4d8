use anyhow::Result;
use chrono::TimeDelta;
use std::future::Future;
use std::time::Duration;
use tracing::info;

use super::rate::{RateEntry, fetch_entry};
use super::ui::{self, StyleType};
use crate::core::{CurrencyPair, RateFetcher};

/// Refreshes the rate every `interval` until `shutdown` resolves.
///
/// The next cycle is scheduled the same way whether or not a rate was found.
/// A fetch still in flight when `shutdown` fires is dropped, so its result is
/// never handed to `on_entry`.
pub async fn watch_until<F, S>(
    fetcher: &RateFetcher,
    pair: &CurrencyPair,
    interval: Duration,
    shutdown: S,
    mut on_entry: F,
) -> Result<()>
where
    F: FnMut(&RateEntry),
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let entry = tokio::select! {
            biased;
            _ = &mut shutdown => break,
            entry = fetch_entry(fetcher, pair) => entry,
        };
        on_entry(&entry);

        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    info!("Stopped refreshing {}", pair);
    Ok(())
}

/// Prints a fresh rate line every `interval` until Ctrl-C.
pub async fn watch(fetcher: &RateFetcher, pair: &CurrencyPair, interval: Duration) -> Result<()> {
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    watch_until(fetcher, pair, interval, shutdown, |entry| {
        println!("{}", ui::render_rate_line(&entry.pair, entry.rate));
        if let Some(next) = next_refresh(entry, interval) {
            println!(
                "{}",
                ui::style_text(
                    &format!("Next refresh at {}", next.format("%Y-%m-%d %H:%M")),
                    StyleType::Subtle
                )
            );
        }
    })
    .await
}

fn next_refresh(entry: &RateEntry, interval: Duration) -> Option<chrono::DateTime<chrono::Local>> {
    TimeDelta::from_std(interval)
        .ok()
        .and_then(|delta| entry.fetched_at.checked_add_signed(delta))
}
