//! Forecasting command implementations

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use sift_core::history::load_history;
use sift_core::SpendingForecaster;

/// Forecast next-month spending from a transaction history CSV.
pub fn cmd_forecast(history: &Path, months_ahead: u32, as_of: Option<NaiveDate>) -> Result<()> {
    let transactions = load_history(history)
        .with_context(|| format!("Failed to load history from {}", history.display()))?;
    info!(rows = transactions.len(), "Loaded transaction history");

    let forecaster = SpendingForecaster::new();
    let forecast = match as_of {
        Some(date) => forecaster.predict_next_month_as_of(&transactions, months_ahead, date)?,
        None => forecaster.predict_next_month(&transactions, months_ahead)?,
    };

    println!("{}", serde_json::to_string_pretty(&forecast)?);
    Ok(())
}

/// Report per-category spending trends over a recent window.
pub fn cmd_trends(history: &Path, months: u32, as_of: Option<NaiveDate>) -> Result<()> {
    let transactions = load_history(history)
        .with_context(|| format!("Failed to load history from {}", history.display()))?;
    info!(rows = transactions.len(), "Loaded transaction history");

    let forecaster = SpendingForecaster::new();
    let trends = match as_of {
        Some(date) => forecaster.get_spending_trends_as_of(&transactions, months, date)?,
        None => forecaster.get_spending_trends(&transactions, months)?,
    };

    println!("{}", serde_json::to_string_pretty(&trends)?);
    Ok(())
}
