//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Sift - categorize expenses and forecast spending
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Expense categorization and spending forecasts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Model artifact path (defaults to SIFT_MODEL_PATH or the platform data dir)
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Train the categorizer from the bundled corpus and persist the model
    Train,

    /// Categorize a single transaction description
    Categorize {
        /// Free-text transaction description
        description: String,
    },

    /// Categorize descriptions read from a file, one per line (max 100)
    Batch {
        /// File with one description per line
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List the category taxonomy
    Categories,

    /// Forecast next-period spending from a transaction history CSV
    Forecast {
        /// History CSV with date,amount,category,type columns
        #[arg(long)]
        history: PathBuf,

        /// Number of months ahead to predict (1-12)
        #[arg(short, long, default_value = "1")]
        months_ahead: u32,

        /// Reference date for the forecast (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Analyze spending trends from a transaction history CSV
    Trends {
        /// History CSV with date,amount,category,type columns
        #[arg(long)]
        history: PathBuf,

        /// Number of months to analyze (1-24)
        #[arg(short, long, default_value = "6")]
        months: u32,

        /// Reference date for the analysis (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Show model and predictor status
    Info,
}
