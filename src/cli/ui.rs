use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::{CurrencyPair, Rate};

/// Shown in place of a rate when every provider came back empty.
pub const PLACEHOLDER: &str = "—";

/// Defines different styles for text elements.
pub enum StyleType {
    Pair,
    Value,
    Placeholder,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Pair => style(text).bold(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Placeholder => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Formats a rate to one decimal place, or the placeholder when absent.
pub fn format_rate(rate: Option<Rate>) -> String {
    rate.map_or_else(|| PLACEHOLDER.to_string(), |r| r.to_string())
}

/// Renders `AUD → NPR  88.8` with styling applied.
pub fn render_rate_line(pair: &CurrencyPair, rate: Option<Rate>) -> String {
    let value = match rate {
        Some(_) => style_text(&format_rate(rate), StyleType::Value),
        None => style_text(&format_rate(rate), StyleType::Placeholder),
    };
    format!("{}  {}", style_text(&pair.to_string(), StyleType::Pair), value)
}

/// Creates a spinner on stderr; hidden automatically when not attached to a terminal.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
