//! Transaction history loading from CSV
//!
//! Expected columns: `date,amount,category,type` with ISO dates, positive
//! amounts, taxonomy category names, and `expense`/`income` types.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Category, TransactionKind, TransactionRecord};

#[derive(Debug, Deserialize)]
struct HistoryRow {
    date: NaiveDate,
    amount: f64,
    category: Category,
    #[serde(rename = "type")]
    kind: TransactionKind,
}

/// Parse transaction history from CSV data.
pub fn parse_history<R: Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (idx, row) in rdr.deserialize::<HistoryRow>().enumerate() {
        let row = row?;
        if row.amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "row {}: amount must be positive, got {}",
                idx + 1,
                row.amount
            )));
        }
        records.push(TransactionRecord {
            amount: row.amount,
            category: row.category,
            date: row.date,
            kind: row.kind,
        });
    }

    Ok(records)
}

/// Load transaction history from a CSV file.
pub fn load_history(path: &Path) -> Result<Vec<TransactionRecord>> {
    let file = File::open(path)?;
    parse_history(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_history() {
        let csv = "\
date,amount,category,type
2026-01-15,12.50,Food,expense
2026-01-31,80.00,Personal Care,expense
2026-02-01,3000.00,Income,income
";
        let records = parse_history(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, Category::Food);
        assert_eq!(records[1].category, Category::PersonalCare);
        assert_eq!(records[2].kind, TransactionKind::Income);
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let csv = "\
date,amount,category,type
2026-01-15,-5.00,Food,expense
";
        assert!(matches!(
            parse_history(csv.as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let csv = "\
date,amount,category,type
2026-01-15,5.00,Groceries,expense
";
        assert!(matches!(parse_history(csv.as_bytes()), Err(Error::Csv(_))));
    }
}
