//! Domain models for Sift

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fixed spending category taxonomy.
///
/// Every classifier output and every transaction's category field is a member
/// of this set. `Other` is the fallback when input is insufficient to
/// classify. Ordering follows the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Healthcare,
    Education,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Other,
    Income,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::PersonalCare => "Personal Care",
            Self::Other => "Other",
            Self::Income => "Income",
        }
    }

    /// All categories in taxonomy order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Shopping,
            Self::Bills,
            Self::Healthcare,
            Self::Education,
            Self::PersonalCare,
            Self::Other,
            Self::Income,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" | "transportation" => Ok(Self::Transport),
            "entertainment" => Ok(Self::Entertainment),
            "shopping" => Ok(Self::Shopping),
            "bills" => Ok(Self::Bills),
            "healthcare" => Ok(Self::Healthcare),
            "education" => Ok(Self::Education),
            "personal care" | "personal_care" | "personalcare" => Ok(Self::PersonalCare),
            "other" => Ok(Self::Other),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a transaction adds to or draws from an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A historical transaction, read-only input to the forecaster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Positive amount in account currency
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// Result of classifying a single description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: Category,
    /// Posterior probability of the predicted category, in [0, 1]
    pub confidence: f64,
}

/// One entry of a batch classification result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPrediction {
    pub description: String,
    pub category: Category,
    pub confidence: f64,
}

/// Coarse direction of month-over-month category spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall forecast confidence tier, derived from sample size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-category descriptive statistics included in a forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Mean expense amount in the lookback window
    pub average: f64,
    /// Sample standard deviation (0 if fewer than 2 points)
    pub std_dev: f64,
    /// Number of transactions observed
    pub count: usize,
    pub trend: TrendDirection,
}

/// Next-period spending forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted amount per category observed in the lookback window
    pub predictions: BTreeMap<Category, f64>,
    pub total_predicted: f64,
    pub confidence: ConfidenceTier,
    pub prediction_date: NaiveDate,
    /// Set when the forecast is degraded (insufficient history)
    pub message: Option<String>,
    /// Per-category statistics for transparency
    pub stats: BTreeMap<Category, CategoryStats>,
    /// Number of qualifying transactions the forecast is based on
    pub data_points: usize,
}

/// Spending trend analysis for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendEntry {
    pub category: Category,
    /// Mean of the monthly totals in the window
    pub monthly_average: f64,
    pub trend: TrendDirection,
    /// (last month - first month) / first month, in percent
    pub percentage_change: f64,
    pub last_month_amount: f64,
}

/// Single-category forecast for a target month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryForecast {
    pub category: Category,
    pub target_month: NaiveDate,
    pub predicted_amount: f64,
    /// max(0, 1 - coefficient of variation), in [0, 1]
    pub confidence: f64,
    pub historical_average: f64,
    pub std_deviation: f64,
    pub transaction_count: usize,
    /// Set when there is not enough history for this category
    pub message: Option<String>,
}

/// Summary of the categorizer model state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub algorithm: String,
    pub categories: Vec<Category>,
    pub loaded: bool,
    pub trained_at: Option<DateTime<Utc>>,
    pub holdout_accuracy: Option<f64>,
    pub vocabulary_size: Option<usize>,
}
