//! Training and status command implementations

use std::path::Path;

use anyhow::Result;

use sift_core::categorizer::corpus;
use sift_core::SpendingForecaster;

use super::categorizer_for;

/// Train the categorizer from the bundled corpus and persist the artifact.
pub fn cmd_train(model: Option<&Path>) -> Result<()> {
    let categorizer = categorizer_for(model);

    println!("📚 Training categorization model from bundled corpus...");
    let metadata = categorizer.train(&corpus::seed_examples())?;
    categorizer.save_model()?;

    println!(
        "✅ Trained on {} examples ({} vocabulary terms)",
        metadata.training_examples, metadata.vocabulary_size
    );
    if let Some(accuracy) = metadata.holdout_accuracy {
        println!("   Hold-out accuracy: {:.1}%", accuracy * 100.0);
    }
    Ok(())
}

/// Show categorizer and forecaster status.
pub fn cmd_info(model: Option<&Path>) -> Result<()> {
    let categorizer = categorizer_for(model);

    // Report on the persisted artifact if one exists; not finding one is
    // status, not an error.
    let loaded = categorizer.load_model()?;
    if !loaded {
        println!("⚠️  No model artifact found (will train on first use)");
    }

    let forecaster = SpendingForecaster::new();
    let info = serde_json::json!({
        "categorizer": categorizer.model_info(),
        "predictor": {
            "type": "statistical",
            "min_transactions": forecaster.min_transactions(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
