//! TF-IDF featurization for transaction descriptions
//!
//! Frequency-weighted unigram + bigram representation with stop-word removal,
//! a bounded vocabulary, smooth IDF, and L2-normalized rows. Fitting is fully
//! deterministic: vocabulary selection is by document frequency with
//! alphabetical tie-breaking.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on vocabulary size
pub const MAX_FEATURES: usize = 1000;

/// Common English words excluded from the vocabulary
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had", "has", "have",
    "he", "her", "his", "if", "in", "is", "it", "its", "my", "no", "not", "of", "on", "or", "our",
    "she", "so", "that", "the", "their", "they", "this", "to", "was", "we", "were", "will", "with",
    "you", "your",
];

/// TF-IDF vectorizer over unigrams and bigrams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term -> feature index
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index
    idf: Vec<f64>,
    /// Number of documents seen during fitting
    n_documents: usize,
    max_features: usize,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            max_features: MAX_FEATURES,
        }
    }

    #[cfg(test)]
    pub fn with_max_features(max_features: usize) -> Self {
        Self {
            max_features,
            ..Self::new()
        }
    }

    /// Lowercase, split on non-alphanumeric, drop single characters and
    /// stop words, then append bigrams of the surviving tokens.
    pub fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.len() > 1 && !STOP_WORDS.contains(w))
            .collect();

        let mut terms: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        for pair in words.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms
    }

    /// Fit the vocabulary and IDF table on training documents.
    pub fn fit(&mut self, documents: &[&str]) -> Result<()> {
        if documents.is_empty() {
            return Err(Error::Training("no documents to fit vectorizer".into()));
        }

        self.n_documents = documents.len();

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<String> = Self::tokenize(doc).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        // Keep the most frequent terms, alphabetical on ties, then index
        // alphabetically for a stable layout.
        let mut ranked: Vec<(String, usize)> = document_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);
        ranked.sort_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = HashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        let n = self.n_documents as f64;
        for (idx, (term, df)) in ranked.into_iter().enumerate() {
            // Smooth IDF: ln((N + 1) / (df + 1)) + 1
            idf.push(((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        Ok(())
    }

    /// Transform a document into an L2-normalized TF-IDF vector.
    ///
    /// Unknown terms are skipped; a document with no known terms maps to the
    /// zero vector rather than failing.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.vocabulary.len()];
        for term in Self::tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                row[idx] += 1.0;
            }
        }

        for (idx, value) in row.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut row {
                *value /= norm;
            }
        }
        row
    }

    /// Transform a batch of documents in one pass.
    pub fn transform_batch(&self, documents: &[&str]) -> Vec<Vec<f64>> {
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
