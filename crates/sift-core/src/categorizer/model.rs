//! Trained categorization pipeline: TF-IDF featurization + naive Bayes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Category, Prediction};

use super::bayes::{MultinomialNb, ALPHA};
use super::vectorizer::TfidfVectorizer;

/// Fraction of each category's examples held out for evaluation
const HOLDOUT_EVERY_NTH: usize = 5;

/// Metadata recorded when a model is trained
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub trained_at: DateTime<Utc>,
    pub training_examples: usize,
    /// Accuracy on the held-out partition, if one existed
    pub holdout_accuracy: Option<f64>,
    pub vocabulary_size: usize,
}

/// A fully trained, immutable categorization model
///
/// Built once by [`TrainedModel::train`] and never mutated afterwards, so it
/// can be shared freely across threads behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
    pub metadata: ModelMetadata,
}

impl TrainedModel {
    /// Train a new model from (description, category) pairs.
    ///
    /// Uses a deterministic stratified 80/20 split: within each category,
    /// every fifth example is held out for evaluation. Evaluation is
    /// reported through the metadata and logs; it never fails training.
    pub fn train(examples: &[(String, Category)]) -> Result<Self> {
        if examples.is_empty() {
            return Err(Error::Training("training data is empty".into()));
        }

        let (train, eval) = stratified_split(examples);

        let train_docs: Vec<&str> = train.iter().map(|(d, _)| d.as_str()).collect();
        let train_labels: Vec<Category> = train.iter().map(|(_, c)| *c).collect();

        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&train_docs)?;

        let rows = vectorizer.transform_batch(&train_docs);
        let classifier = MultinomialNb::fit(&rows, &train_labels, ALPHA)?;

        let mut model = Self {
            vectorizer,
            classifier,
            metadata: ModelMetadata {
                trained_at: Utc::now(),
                training_examples: train.len(),
                holdout_accuracy: None,
                vocabulary_size: 0,
            },
        };
        model.metadata.vocabulary_size = model.vectorizer.vocabulary_size();

        if !eval.is_empty() {
            let correct = eval
                .iter()
                .filter(|(desc, expected)| model.predict(desc).category == *expected)
                .count();
            let accuracy = correct as f64 / eval.len() as f64;
            model.metadata.holdout_accuracy = Some(accuracy);
            info!(
                train_examples = train.len(),
                eval_examples = eval.len(),
                accuracy,
                "Trained categorization model"
            );
        } else {
            info!(
                train_examples = train.len(),
                "Trained categorization model (no hold-out partition)"
            );
        }

        Ok(model)
    }

    /// Classify one description.
    ///
    /// A description that featurizes to nothing known (blank text, unseen
    /// vocabulary only) maps to `Other` with confidence 0.0 instead of
    /// failing.
    pub fn predict(&self, description: &str) -> Prediction {
        let row = self.vectorizer.transform(description);
        Self::score_row(&self.classifier, &row)
    }

    /// Classify a batch of descriptions, featurizing them in one pass.
    ///
    /// Result order matches the input order, and each entry equals what
    /// [`TrainedModel::predict`] would return for that description.
    pub fn predict_batch(&self, descriptions: &[String]) -> Vec<Prediction> {
        let docs: Vec<&str> = descriptions.iter().map(|d| d.as_str()).collect();
        let rows = self.vectorizer.transform_batch(&docs);
        rows.iter()
            .map(|row| Self::score_row(&self.classifier, row))
            .collect()
    }

    fn score_row(classifier: &MultinomialNb, row: &[f64]) -> Prediction {
        if row.iter().all(|v| *v == 0.0) {
            debug!("description featurized to nothing known, falling back to Other");
            return Prediction {
                category: Category::Other,
                confidence: 0.0,
            };
        }
        let (category, confidence) = classifier.predict(row);
        Prediction {
            category,
            confidence,
        }
    }
}

/// Split examples into train/eval partitions, stratified by category.
///
/// Within each category, every fifth example (in corpus order) goes to the
/// evaluation partition. Deterministic, so training is reproducible and every
/// category with enough examples keeps most of them for training.
fn stratified_split(
    examples: &[(String, Category)],
) -> (Vec<(String, Category)>, Vec<(String, Category)>) {
    let mut seen_per_category: std::collections::HashMap<Category, usize> =
        std::collections::HashMap::new();
    let mut train = Vec::new();
    let mut eval = Vec::new();

    for (desc, cat) in examples {
        let seen = seen_per_category.entry(*cat).or_insert(0);
        *seen += 1;
        if *seen % HOLDOUT_EVERY_NTH == 0 {
            eval.push((desc.clone(), *cat));
        } else {
            train.push((desc.clone(), *cat));
        }
    }

    (train, eval)
}
