pub mod cli;
pub mod core;
pub mod providers;

// Re-export for integration tests and external callers
pub use crate::core::config;

use crate::core::CurrencyPair;
use anyhow::Result;
use tracing::{debug, info};

/// Fixed pair shown by the CLI; not user configurable.
pub const BASE_CURRENCY: &str = "AUD";
pub const QUOTE_CURRENCY: &str = "NPR";

pub enum AppCommand {
    Rate,
    Watch,
}

fn load_config(config_path: Option<&str>) -> Result<config::AppConfig> {
    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("ratefetch starting...");

    let config = load_config(config_path)?;
    let fetcher = providers::rate_fetcher(&config);
    let pair = CurrencyPair::new(BASE_CURRENCY, QUOTE_CURRENCY);

    match command {
        AppCommand::Rate => {
            cli::rate::show_rate(&fetcher, &pair).await;
            Ok(())
        }
        AppCommand::Watch => cli::watch::watch(&fetcher, &pair, config.refresh_interval()).await,
    }
}
