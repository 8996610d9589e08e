//! Model artifact persistence
//!
//! The trained pipeline is stored as a single gzip-compressed JSON blob per
//! deployment. Writes go through a temp file in the target directory and are
//! renamed into place, so a crashed save never leaves a truncated artifact.
//! A missing artifact is "not found" rather than an error; a corrupt one is
//! discarded so the caller falls back to retraining.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::error::Result;

use super::model::TrainedModel;

/// File name of the persisted artifact under the data directory
const ARTIFACT_FILE: &str = "categorizer.json.gz";

/// Environment variable overriding the artifact location
pub const MODEL_PATH_ENV: &str = "SIFT_MODEL_PATH";

/// Stores and retrieves the trained model artifact on the local filesystem
#[derive(Debug, Clone)]
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the default artifact path.
    ///
    /// Priority: `SIFT_MODEL_PATH` env var, then the platform data directory
    /// (e.g. `~/.local/share/sift/models/` on Linux), then a `models/`
    /// directory relative to the working directory.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(MODEL_PATH_ENV) {
            return PathBuf::from(path);
        }
        match dirs::data_dir() {
            Some(data) => data.join("sift").join("models").join(ARTIFACT_FILE),
            None => PathBuf::from("models").join(ARTIFACT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the model, creating intermediate directories as needed.
    pub fn save(&self, model: &TrainedModel) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        let mut encoder = GzEncoder::new(tmp.as_file_mut(), Compression::default());
        serde_json::to_writer(&mut encoder, model)?;
        encoder.finish()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        info!(path = %self.path.display(), "Saved model artifact");
        Ok(())
    }

    /// Load the persisted model, if a usable artifact exists.
    ///
    /// Returns `Ok(None)` when the file is missing or cannot be decoded.
    pub fn load(&self) -> Result<Option<TrainedModel>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        match serde_json::from_reader::<_, TrainedModel>(decoder) {
            Ok(model) => {
                info!(path = %self.path.display(), "Loaded model artifact");
                Ok(Some(model))
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable model artifact"
                );
                Ok(None)
            }
        }
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorizer::corpus::seed_examples;

    use std::io::Write;

    fn store_in(dir: &Path) -> ModelStore {
        ModelStore::new(dir.join("nested").join(ARTIFACT_FILE))
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_dirs_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let model = TrainedModel::train(&seed_examples()).unwrap();
        store.save(&model).unwrap();
        assert!(store.path().exists());

        let loaded = store.load().unwrap().expect("artifact should load");
        for desc in ["Starbucks coffee", "Uber ride downtown", ""] {
            assert_eq!(model.predict(desc), loaded.predict(desc));
        }
    }

    #[test]
    fn test_corrupt_artifact_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        let mut file = File::create(store.path()).unwrap();
        file.write_all(b"not a gzip stream").unwrap();

        assert!(store.load().unwrap().is_none());
    }
}
