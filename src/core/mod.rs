//! Core rate fetching abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod fetcher;
pub mod log;
pub mod rate;

// Re-export main types for cleaner imports
pub use currency::RateProvider;
pub use error::{FetchError, ProviderError};
pub use fetcher::RateFetcher;
pub use rate::{CurrencyPair, FetchResult, Rate};
