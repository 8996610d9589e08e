//! Sift Core Library
//!
//! Expense categorization and forecasting for personal finance tools:
//! - TF-IDF + naive Bayes text classifier mapping transaction descriptions
//!   to a fixed category taxonomy
//! - Statistical spending forecaster projecting next-period spend per
//!   category from historical transactions
//! - Model artifact persistence with lazy cold-start training
//! - Transaction history CSV loading

pub mod categorizer;
pub mod error;
pub mod forecast;
pub mod history;
pub mod models;

pub use categorizer::{
    ExpenseCategorizer, ModelMetadata, ModelStore, TrainedModel, MAX_BATCH_SIZE,
};
pub use error::{Error, Result};
pub use forecast::{SpendingForecaster, LOOKBACK_DAYS, MIN_TRANSACTIONS};
pub use models::{
    BatchPrediction, Category, CategoryForecast, CategoryStats, ConfidenceTier, Forecast,
    ModelInfo, Prediction, TransactionKind, TransactionRecord, TrendDirection, TrendEntry,
};
