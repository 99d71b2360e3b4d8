//! Rate value types shared by providers and the fetcher

use std::fmt::Display;

use super::error::FetchError;

/// Units of quote currency for one unit of base currency.
///
/// A `Rate` is always strictly positive and finite; use [`Rate::new`] to
/// build one from a raw provider value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rate(f64);

impl Rate {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Rate(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A base/quote currency code pair, e.g. `AUD`/`NPR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: String,
    pub quote: String,
}

impl CurrencyPair {
    pub fn new(base: &str, quote: &str) -> Self {
        CurrencyPair {
            base: base.to_string(),
            quote: quote.to_string(),
        }
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.base, self.quote)
    }
}

/// Outcome of one orchestrated fetch: a rate, or the exhausted-providers error.
pub type FetchResult = Result<Rate, FetchError>;
