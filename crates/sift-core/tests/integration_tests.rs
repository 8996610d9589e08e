//! Integration tests for sift-core
//!
//! These tests exercise the full cold start → categorize → persist →
//! forecast workflow.

use chrono::NaiveDate;

use sift_core::categorizer::{corpus, ExpenseCategorizer, ModelStore};
use sift_core::{
    Category, ConfidenceTier, Error, SpendingForecaster, TransactionKind, TransactionRecord,
};

fn date(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Six months of plausible history: steady groceries, growing dining out,
/// one salary deposit per month.
fn sample_history() -> Vec<TransactionRecord> {
    let mut history = Vec::new();
    for month in 1..=6u32 {
        history.push(TransactionRecord {
            amount: 320.0,
            category: Category::Food,
            date: date(2026, month, 3),
            kind: TransactionKind::Expense,
        });
        history.push(TransactionRecord {
            amount: 40.0 + 10.0 * month as f64,
            category: Category::Entertainment,
            date: date(2026, month, 12),
            kind: TransactionKind::Expense,
        });
        history.push(TransactionRecord {
            amount: 90.0,
            category: Category::Bills,
            date: date(2026, month, 20),
            kind: TransactionKind::Expense,
        });
        history.push(TransactionRecord {
            amount: 4000.0,
            category: Category::Income,
            date: date(2026, month, 1),
            kind: TransactionKind::Income,
        });
    }
    history
}

#[test]
fn test_cold_start_then_reload_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("models").join("categorizer.json.gz");

    // First process: no artifact on disk, first request trains and persists
    let categorizer = ExpenseCategorizer::new(ModelStore::new(&store_path));
    let first = categorizer.categorize("Starbucks coffee morning").unwrap();
    assert_eq!(first.category, Category::Food);
    assert!(first.confidence > 0.5);
    assert!(store_path.exists());

    // Second process: loads the artifact instead of retraining and
    // reproduces the same prediction
    let restarted = ExpenseCategorizer::new(ModelStore::new(&store_path));
    assert!(restarted.load_model().unwrap());
    let again = restarted.categorize("Starbucks coffee morning").unwrap();
    assert_eq!(again, first);
}

#[test]
fn test_every_prediction_stays_in_taxonomy() {
    let dir = tempfile::tempdir().unwrap();
    let categorizer = ExpenseCategorizer::new(ModelStore::new(dir.path().join("m.json.gz")));
    categorizer.train(&corpus::seed_examples()).unwrap();

    let descriptions: Vec<String> = [
        "WHOLE FOODS #123 SEATTLE WA",
        "SQ *UNKNOWN MERCHANT",
        "7281937492 POS DEBIT",
        "uber trip help.uber.com",
        "!!!",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let results = categorizer.categorize_batch(&descriptions).unwrap();
    assert_eq!(results.len(), descriptions.len());
    for entry in &results {
        assert!(Category::all().contains(&entry.category));
        assert!((0.0..=1.0).contains(&entry.confidence));
    }
}

#[test]
fn test_batch_limit_enforced_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let categorizer = ExpenseCategorizer::new(ModelStore::new(dir.path().join("m.json.gz")));

    let too_many: Vec<String> = (0..101).map(|i| format!("merchant {}", i)).collect();
    assert!(matches!(
        categorizer.categorize_batch(&too_many),
        Err(Error::TooManyItems { .. })
    ));
}

#[test]
fn test_forecast_over_sample_history() {
    let forecaster = SpendingForecaster::new();
    let history = sample_history();

    let forecast = forecaster
        .predict_next_month_as_of(&history, 1, date(2026, 6, 25))
        .unwrap();

    // 18 expenses in the window: medium confidence wouldn't be reached,
    // low tier with full per-category breakdown
    assert_eq!(forecast.data_points, 18);
    assert_eq!(forecast.confidence, ConfidenceTier::Low);
    assert_eq!(forecast.prediction_date, date(2026, 7, 25));
    assert!(forecast.message.is_none());

    // Steady category predicts its average; income never appears
    assert_eq!(forecast.predictions[&Category::Food], 320.0);
    assert!(!forecast.predictions.contains_key(&Category::Income));

    // Growing category extrapolates above its average
    let entertainment_avg = forecast.stats[&Category::Entertainment].average;
    assert!(forecast.predictions[&Category::Entertainment] > entertainment_avg);

    let total: f64 = forecast.predictions.values().sum();
    assert!((forecast.total_predicted - total).abs() < 0.01);
}

#[test]
fn test_trends_over_sample_history() {
    let forecaster = SpendingForecaster::new();
    let history = sample_history();

    let trends = forecaster
        .get_spending_trends_as_of(&history, 6, date(2026, 6, 25))
        .unwrap();

    let entertainment = trends
        .iter()
        .find(|t| t.category == Category::Entertainment)
        .expect("entertainment trend present");
    assert_eq!(entertainment.trend, sift_core::TrendDirection::Increasing);
    assert!(entertainment.percentage_change > 10.0);

    let food = trends
        .iter()
        .find(|t| t.category == Category::Food)
        .expect("food trend present");
    assert_eq!(food.trend, sift_core::TrendDirection::Stable);
    assert_eq!(food.monthly_average, 320.0);
}

#[test]
fn test_new_user_gets_degraded_forecast_not_error() {
    let forecaster = SpendingForecaster::new();
    let history = vec![TransactionRecord {
        amount: 12.0,
        category: Category::Food,
        date: date(2026, 6, 1),
        kind: TransactionKind::Expense,
    }];

    let forecast = forecaster
        .predict_next_month_as_of(&history, 2, date(2026, 6, 25))
        .unwrap();
    assert!(forecast.predictions.is_empty());
    assert_eq!(forecast.total_predicted, 0.0);
    assert_eq!(forecast.confidence, ConfidenceTier::Low);
    assert_eq!(forecast.prediction_date, date(2026, 8, 25));

    let trends = forecaster
        .get_spending_trends_as_of(&[], 6, date(2026, 6, 25))
        .unwrap();
    assert!(trends.is_empty());
}
