use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use ratefetch::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch and display the current rate once
    Rate,
    /// Keep displaying the rate, refreshing on the configured interval
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => ratefetch::cli::setup::setup(),
        Some(Commands::Rate) => {
            ratefetch::run_command(ratefetch::AppCommand::Rate, cli.config_path.as_deref()).await
        }
        Some(Commands::Watch) => {
            ratefetch::run_command(ratefetch::AppCommand::Watch, cli.config_path.as_deref()).await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
