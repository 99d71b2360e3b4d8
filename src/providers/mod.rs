pub mod exchangerate_host;
pub mod open_er_api;
pub mod util;

use std::sync::Arc;

use crate::core::RateProvider;
use crate::core::config::AppConfig;
use crate::core::fetcher::RateFetcher;

/// Builds the fetcher with providers in fixed priority order:
/// exchangerate.host first, then open.er-api.com.
pub fn rate_fetcher(config: &AppConfig) -> RateFetcher {
    let mut providers: Vec<Arc<dyn RateProvider>> = Vec::new();

    if let Some(p) = &config.providers.exchangerate_host {
        providers.push(Arc::new(exchangerate_host::ExchangeRateHostProvider::new(
            &p.base_url,
        )));
    }
    if let Some(p) = &config.providers.open_er_api {
        providers.push(Arc::new(open_er_api::OpenErApiProvider::new(&p.base_url)));
    }

    RateFetcher::new(providers, config.timeout())
}
