//! Expense categorization engine
//!
//! Maps free-text transaction descriptions to a fixed category taxonomy with
//! a confidence score, using TF-IDF featurization over unigrams and bigrams
//! and a multinomial naive Bayes classifier.
//!
//! The trained pipeline is process-wide shared state. [`ExpenseCategorizer`]
//! owns it behind a read/write lock and performs the lazy load-or-train
//! transition (cold start) under a dedicated mutex, so concurrent first
//! requests trigger at most one training pass and a partially built model is
//! never visible to readers.

pub mod corpus;

mod bayes;
mod model;
mod store;
mod vectorizer;

pub use model::{ModelMetadata, TrainedModel};
pub use store::{ModelStore, MODEL_PATH_ENV};
pub use vectorizer::MAX_FEATURES;

use std::sync::{Arc, Mutex, RwLock};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{BatchPrediction, Category, ModelInfo, Prediction};

/// Maximum number of descriptions accepted by [`ExpenseCategorizer::categorize_batch`]
pub const MAX_BATCH_SIZE: usize = 100;

/// Service object owning the categorization model
pub struct ExpenseCategorizer {
    /// Current model; readers clone the `Arc` and drop the lock immediately
    model: RwLock<Option<Arc<TrainedModel>>>,
    /// Serializes the load-or-train transition on cold start
    load_guard: Mutex<()>,
    store: ModelStore,
}

impl ExpenseCategorizer {
    pub fn new(store: ModelStore) -> Self {
        Self {
            model: RwLock::new(None),
            load_guard: Mutex::new(()),
            store,
        }
    }

    /// The static category taxonomy, independent of training state.
    pub fn categories(&self) -> &'static [Category] {
        Category::all()
    }

    /// Classify a single description.
    ///
    /// Fails with [`Error::EmptyInput`] for blank text. On the first call in
    /// a process the model is loaded from disk, or trained from the bundled
    /// corpus and persisted.
    pub fn categorize(&self, description: &str) -> Result<Prediction> {
        if description.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let model = self.ensure_loaded()?;
        Ok(model.predict(description))
    }

    /// Classify up to [`MAX_BATCH_SIZE`] descriptions in input order.
    pub fn categorize_batch(&self, descriptions: &[String]) -> Result<Vec<BatchPrediction>> {
        if descriptions.is_empty() {
            return Err(Error::EmptyInput);
        }
        if descriptions.len() > MAX_BATCH_SIZE {
            return Err(Error::TooManyItems {
                count: descriptions.len(),
                limit: MAX_BATCH_SIZE,
            });
        }

        let model = self.ensure_loaded()?;
        let predictions = model.predict_batch(descriptions);
        Ok(descriptions
            .iter()
            .zip(predictions)
            .map(|(description, p)| BatchPrediction {
                description: description.clone(),
                category: p.category,
                confidence: p.confidence,
            })
            .collect())
    }

    /// Train a new model from the given examples and swap it in.
    ///
    /// Replaces the in-memory model only; call [`ExpenseCategorizer::save_model`]
    /// to persist it.
    pub fn train(&self, examples: &[(String, Category)]) -> Result<ModelMetadata> {
        let trained = Arc::new(TrainedModel::train(examples)?);
        let metadata = trained.metadata.clone();
        *self.model.write().unwrap() = Some(trained);
        Ok(metadata)
    }

    /// Persist the current model artifact.
    ///
    /// Fails with [`Error::NoModel`] if nothing has been trained or loaded.
    pub fn save_model(&self) -> Result<()> {
        let current = self.model.read().unwrap().clone();
        match current {
            Some(model) => self.store.save(&model),
            None => Err(Error::NoModel),
        }
    }

    /// Load a persisted artifact, returning whether one was found.
    pub fn load_model(&self) -> Result<bool> {
        match self.store.load()? {
            Some(model) => {
                *self.model.write().unwrap() = Some(Arc::new(model));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Current model state for diagnostics.
    pub fn model_info(&self) -> ModelInfo {
        let current = self.model.read().unwrap().clone();
        ModelInfo {
            algorithm: "TF-IDF + multinomial naive Bayes".to_string(),
            categories: Category::all().to_vec(),
            loaded: current.is_some(),
            trained_at: current.as_ref().map(|m| m.metadata.trained_at),
            holdout_accuracy: current.as_ref().and_then(|m| m.metadata.holdout_accuracy),
            vocabulary_size: current.as_ref().map(|m| m.metadata.vocabulary_size),
        }
    }

    /// Get the current model, loading or training it if necessary.
    ///
    /// The fast path takes the read lock only long enough to clone the `Arc`.
    /// The cold-start path runs under `load_guard`: first try the persisted
    /// artifact, then train from the bundled corpus and persist the result.
    /// A failed persist is logged but does not fail the request.
    fn ensure_loaded(&self) -> Result<Arc<TrainedModel>> {
        if let Some(model) = self.model.read().unwrap().clone() {
            return Ok(model);
        }

        let _guard = self.load_guard.lock().unwrap();

        // Another caller may have finished the transition while we waited
        if let Some(model) = self.model.read().unwrap().clone() {
            return Ok(model);
        }

        let model = match self.store.load()? {
            Some(model) => Arc::new(model),
            None => {
                info!("No model artifact found; training from bundled corpus");
                let trained = Arc::new(TrainedModel::train(&corpus::seed_examples())?);
                if let Err(e) = self.store.save(&trained) {
                    warn!(error = %e, "Failed to persist freshly trained model");
                }
                trained
            }
        };

        *self.model.write().unwrap() = Some(model.clone());
        Ok(model)
    }
}

impl Default for ExpenseCategorizer {
    fn default() -> Self {
        Self::new(ModelStore::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorizer_in(dir: &std::path::Path) -> ExpenseCategorizer {
        ExpenseCategorizer::new(ModelStore::new(dir.join("categorizer.json.gz")))
    }

    #[test]
    fn test_blank_description_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());

        assert!(matches!(cat.categorize(""), Err(Error::EmptyInput)));
        assert!(matches!(cat.categorize("   "), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());
        assert!(matches!(cat.categorize_batch(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_oversized_batch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());

        let descriptions: Vec<String> = (0..101).map(|i| format!("item {}", i)).collect();
        match cat.categorize_batch(&descriptions) {
            Err(Error::TooManyItems { count, limit }) => {
                assert_eq!(count, 101);
                assert_eq!(limit, MAX_BATCH_SIZE);
            }
            other => panic!("expected TooManyItems, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_cold_start_trains_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());

        let p = cat.categorize("Starbucks coffee morning").unwrap();
        assert_eq!(p.category, Category::Food);
        assert!(p.confidence > 0.5);

        // The lazily trained model was persisted; a fresh service loads it
        // instead of retraining.
        let second = categorizer_in(dir.path());
        assert!(second.load_model().unwrap());
        assert_eq!(second.categorize("Starbucks coffee morning").unwrap(), p);
    }

    #[test]
    fn test_save_without_model_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());
        assert!(matches!(cat.save_model(), Err(Error::NoModel)));
    }

    #[test]
    fn test_load_without_artifact_is_false() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());
        assert!(!cat.load_model().unwrap());
    }

    #[test]
    fn test_save_load_predict_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());

        cat.train(&corpus::seed_examples()).unwrap();
        let before = cat.categorize("Uber ride downtown").unwrap();

        cat.save_model().unwrap();
        assert!(cat.load_model().unwrap());
        let after = cat.categorize("Uber ride downtown").unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_batch_preserves_order_and_matches_single() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());

        let descriptions: Vec<String> = [
            "Netflix monthly subscription",
            "Pharmacy prescription refill",
            "Monthly salary deposit",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let batch = cat.categorize_batch(&descriptions).unwrap();
        assert_eq!(batch.len(), 3);
        for (desc, entry) in descriptions.iter().zip(&batch) {
            assert_eq!(&entry.description, desc);
            let single = cat.categorize(desc).unwrap();
            assert_eq!(entry.category, single.category);
            assert_eq!(entry.confidence, single.confidence);
        }
    }

    #[test]
    fn test_train_empty_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());
        assert!(matches!(cat.train(&[]), Err(Error::Training(_))));
    }

    #[test]
    fn test_categories_independent_of_training_state() {
        let dir = tempfile::tempdir().unwrap();
        let cat = categorizer_in(dir.path());

        assert_eq!(cat.categories(), Category::all());
        assert!(!cat.model_info().loaded);

        cat.train(&corpus::seed_examples()).unwrap();
        let info = cat.model_info();
        assert!(info.loaded);
        assert!(info.vocabulary_size.unwrap() > 0);
        assert_eq!(cat.categories(), Category::all());
    }

    #[test]
    fn test_concurrent_cold_start_single_train() {
        use std::sync::Arc as StdArc;

        let dir = tempfile::tempdir().unwrap();
        let cat = StdArc::new(categorizer_in(dir.path()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cat = cat.clone();
                std::thread::spawn(move || cat.categorize("Starbucks coffee").unwrap())
            })
            .collect();

        let results: Vec<Prediction> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for p in &results {
            assert_eq!(*p, results[0]);
        }
    }
}
