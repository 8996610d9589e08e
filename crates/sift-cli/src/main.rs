//! Sift CLI - expense categorization and spending forecasts
//!
//! Usage:
//!   sift train                          Train and persist the categorizer
//!   sift categorize "Starbucks coffee"  Classify one description
//!   sift batch --file descriptions.txt  Classify up to 100 descriptions
//!   sift forecast --history tx.csv      Predict next-period spending
//!   sift trends --history tx.csv        Month-over-month trend analysis

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Train => commands::cmd_train(cli.model.as_deref()),
        Commands::Categorize { description } => {
            commands::cmd_categorize(cli.model.as_deref(), &description)
        }
        Commands::Batch { file } => commands::cmd_batch(cli.model.as_deref(), &file),
        Commands::Categories => commands::cmd_categories(),
        Commands::Forecast {
            history,
            months_ahead,
            as_of,
        } => commands::cmd_forecast(&history, months_ahead, as_of),
        Commands::Trends {
            history,
            months,
            as_of,
        } => commands::cmd_trends(&history, months, as_of),
        Commands::Info => commands::cmd_info(cli.model.as_deref()),
    }
}
