//! Categorization command implementations

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use sift_core::Category;

use super::categorizer_for;

/// Categorize one description and print the result as JSON.
pub fn cmd_categorize(model: Option<&Path>, description: &str) -> Result<()> {
    let categorizer = categorizer_for(model);
    let prediction = categorizer.categorize(description)?;

    let result = serde_json::json!({
        "description": description,
        "category": prediction.category,
        "confidence": prediction.confidence,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Categorize each non-blank line of a file and print the results as JSON.
pub fn cmd_batch(model: Option<&Path>, file: &Path) -> Result<()> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let descriptions: Vec<String> = contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();

    let categorizer = categorizer_for(model);
    let results = categorizer.categorize_batch(&descriptions)?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

/// Print the category taxonomy.
pub fn cmd_categories() -> Result<()> {
    for category in Category::all() {
        println!("{}", category);
    }
    Ok(())
}
