//! Spending forecaster
//!
//! Projects next-period spending per category from historical expense
//! transactions. Purely a function of its input history: per category it
//! computes the historical mean, the sample deviation, and a first/last
//! monthly-bucket trend slope, then extrapolates the mean along that slope.
//!
//! Insufficient history is an expected steady state for new users, so it
//! produces a degraded low-confidence result instead of an error.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Local, Months, NaiveDate};

use crate::error::{Error, Result};
use crate::models::{
    Category, CategoryForecast, CategoryStats, ConfidenceTier, Forecast, TransactionKind,
    TransactionRecord, TrendDirection, TrendEntry,
};

/// Trailing window of history considered by `predict_next_month`
pub const LOOKBACK_DAYS: i64 = 180;

/// Trailing window considered by `predict_category_for_month`
pub const CATEGORY_LOOKBACK_DAYS: i64 = 365;

/// Minimum qualifying transactions for a non-degraded forecast
pub const MIN_TRANSACTIONS: usize = 5;

/// Minimum transactions for a single-category forecast
const MIN_CATEGORY_POINTS: usize = 3;

/// Percentage-change magnitude beyond which a trend is labeled (strict)
const TREND_PERCENT_THRESHOLD: f64 = 10.0;

/// Stateless spending predictor
#[derive(Debug, Clone)]
pub struct SpendingForecaster {
    min_transactions: usize,
}

impl SpendingForecaster {
    pub fn new() -> Self {
        Self {
            min_transactions: MIN_TRANSACTIONS,
        }
    }

    pub fn min_transactions(&self) -> usize {
        self.min_transactions
    }

    /// Forecast per-category spending `months_ahead` months out.
    ///
    /// `months_ahead` must be in 1..=12.
    pub fn predict_next_month(
        &self,
        history: &[TransactionRecord],
        months_ahead: u32,
    ) -> Result<Forecast> {
        self.predict_next_month_as_of(history, months_ahead, Local::now().date_naive())
    }

    /// Forecast relative to an explicit reference date.
    pub fn predict_next_month_as_of(
        &self,
        history: &[TransactionRecord],
        months_ahead: u32,
        today: NaiveDate,
    ) -> Result<Forecast> {
        if !(1..=12).contains(&months_ahead) {
            return Err(Error::InvalidData(format!(
                "months_ahead must be between 1 and 12, got {}",
                months_ahead
            )));
        }

        // Genuine calendar-month arithmetic, not 30 * N days
        let prediction_date = today + Months::new(months_ahead);

        let cutoff = today - Duration::days(LOOKBACK_DAYS);
        let expenses: Vec<&TransactionRecord> = history
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense && t.date >= cutoff)
            .collect();

        if expenses.len() < self.min_transactions {
            return Ok(Forecast {
                predictions: BTreeMap::new(),
                total_predicted: 0.0,
                confidence: ConfidenceTier::Low,
                prediction_date,
                message: Some(format!(
                    "Need at least {} transactions for predictions",
                    self.min_transactions
                )),
                stats: BTreeMap::new(),
                data_points: expenses.len(),
            });
        }

        let mut predictions = BTreeMap::new();
        let mut stats = BTreeMap::new();

        for (category, txs) in group_by_category(&expenses) {
            let amounts: Vec<f64> = txs.iter().map(|t| t.amount).collect();
            let average = mean(&amounts);
            let std_dev = sample_std(&amounts, average);

            // Trend slope from the first and last monthly buckets only
            let monthly = monthly_totals(&txs);
            let trend = if monthly.len() > 1 {
                let first = *monthly.values().next().unwrap_or(&0.0);
                let last = *monthly.values().next_back().unwrap_or(&0.0);
                (last - first) / monthly.len() as f64
            } else {
                0.0
            };

            let predicted = (average + trend * months_ahead as f64).max(0.0);
            predictions.insert(category, round2(predicted));

            stats.insert(
                category,
                CategoryStats {
                    average: round2(average),
                    std_dev: round2(std_dev),
                    count: txs.len(),
                    trend: direction_of(trend),
                },
            );
        }

        let total_predicted = round2(predictions.values().sum());
        let confidence = confidence_tier(expenses.len());

        Ok(Forecast {
            predictions,
            total_predicted,
            confidence,
            prediction_date,
            message: None,
            stats,
            data_points: expenses.len(),
        })
    }

    /// Month-over-month trend per category over the last `months` months.
    ///
    /// `months` must be in 1..=24. Categories with fewer than two distinct
    /// calendar months of data are excluded: a single month has no
    /// month-over-month direction, so reporting it as zero-trend would be
    /// misleading.
    pub fn get_spending_trends(
        &self,
        history: &[TransactionRecord],
        months: u32,
    ) -> Result<Vec<TrendEntry>> {
        self.get_spending_trends_as_of(history, months, Local::now().date_naive())
    }

    /// Trend analysis relative to an explicit reference date.
    pub fn get_spending_trends_as_of(
        &self,
        history: &[TransactionRecord],
        months: u32,
        today: NaiveDate,
    ) -> Result<Vec<TrendEntry>> {
        if !(1..=24).contains(&months) {
            return Err(Error::InvalidData(format!(
                "months must be between 1 and 24, got {}",
                months
            )));
        }

        let cutoff = today - Duration::days(30 * months as i64);
        let expenses: Vec<&TransactionRecord> = history
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense && t.date >= cutoff)
            .collect();

        let mut trends = Vec::new();

        for (category, txs) in group_by_category(&expenses) {
            let monthly = monthly_totals(&txs);
            if monthly.len() < 2 {
                continue;
            }

            let totals: Vec<f64> = monthly.values().copied().collect();
            let first = totals[0];
            let last = totals[totals.len() - 1];

            let percentage_change = if first > 0.0 {
                (last - first) / first * 100.0
            } else {
                0.0
            };

            let trend = if percentage_change > TREND_PERCENT_THRESHOLD {
                TrendDirection::Increasing
            } else if percentage_change < -TREND_PERCENT_THRESHOLD {
                TrendDirection::Decreasing
            } else {
                TrendDirection::Stable
            };

            trends.push(TrendEntry {
                category,
                monthly_average: round2(mean(&totals)),
                trend,
                percentage_change: round2(percentage_change),
                last_month_amount: round2(last),
            });
        }

        Ok(trends)
    }

    /// Single-category forecast for a target month.
    ///
    /// Requires at least 3 historical points for the category; below that it
    /// returns an explicit insufficient-data result rather than failing.
    pub fn predict_category_for_month(
        &self,
        history: &[TransactionRecord],
        category: Category,
        target_month: NaiveDate,
    ) -> CategoryForecast {
        self.predict_category_for_month_as_of(
            history,
            category,
            target_month,
            Local::now().date_naive(),
        )
    }

    /// Single-category forecast relative to an explicit reference date.
    pub fn predict_category_for_month_as_of(
        &self,
        history: &[TransactionRecord],
        category: Category,
        target_month: NaiveDate,
        today: NaiveDate,
    ) -> CategoryForecast {
        let cutoff = today - Duration::days(CATEGORY_LOOKBACK_DAYS);
        let amounts: Vec<f64> = history
            .iter()
            .filter(|t| {
                t.kind == TransactionKind::Expense && t.category == category && t.date >= cutoff
            })
            .map(|t| t.amount)
            .collect();

        if amounts.len() < MIN_CATEGORY_POINTS {
            return CategoryForecast {
                category,
                target_month,
                predicted_amount: 0.0,
                confidence: 0.0,
                historical_average: 0.0,
                std_deviation: 0.0,
                transaction_count: amounts.len(),
                message: Some("Insufficient data for this category".to_string()),
            };
        }

        let average = mean(&amounts);
        let std_dev = population_std(&amounts, average);

        // Consistency-based confidence: 1 - coefficient of variation
        let confidence = if std_dev > 0.0 {
            (1.0 - std_dev / average).max(0.0)
        } else {
            1.0
        };

        CategoryForecast {
            category,
            target_month,
            predicted_amount: round2(average),
            confidence: round2(confidence),
            historical_average: round2(average),
            std_deviation: round2(std_dev),
            transaction_count: amounts.len(),
            message: None,
        }
    }
}

impl Default for SpendingForecaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Group transactions by category, in taxonomy order.
fn group_by_category<'a>(
    txs: &[&'a TransactionRecord],
) -> BTreeMap<Category, Vec<&'a TransactionRecord>> {
    let mut groups: BTreeMap<Category, Vec<&TransactionRecord>> = BTreeMap::new();
    for tx in txs {
        groups.entry(tx.category).or_default().push(tx);
    }
    groups
}

/// Sum amounts into calendar-month buckets, in chronological order.
fn monthly_totals(txs: &[&TransactionRecord]) -> BTreeMap<(i32, u32), f64> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for tx in txs {
        *buckets.entry((tx.date.year(), tx.date.month())).or_insert(0.0) += tx.amount;
    }
    buckets
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1), 0 for fewer than 2 points.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Population standard deviation, 0 for an empty slice.
fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn direction_of(trend: f64) -> TrendDirection {
    if trend > 0.0 {
        TrendDirection::Increasing
    } else if trend < 0.0 {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

fn confidence_tier(data_points: usize) -> ConfidenceTier {
    if data_points >= 50 {
        ConfidenceTier::High
    } else if data_points >= 20 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
