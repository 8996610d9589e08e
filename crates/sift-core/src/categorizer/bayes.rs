//! Multinomial naive Bayes classifier with additive smoothing

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Category;

/// Additive (Laplace-like) smoothing factor
pub const ALPHA: f64 = 0.1;

/// Multinomial naive Bayes over non-negative feature vectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Categories seen during fitting, in taxonomy order
    classes: Vec<Category>,
    /// ln P(class) per class
    class_log_prior: Vec<f64>,
    /// ln P(feature | class), indexed [class][feature]
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit the classifier on feature rows and their labels.
    pub fn fit(rows: &[Vec<f64>], labels: &[Category], alpha: f64) -> Result<Self> {
        if rows.is_empty() || rows.len() != labels.len() {
            return Err(Error::Training(format!(
                "cannot fit on {} rows with {} labels",
                rows.len(),
                labels.len()
            )));
        }
        let n_features = rows[0].len();

        // Classes in taxonomy order, restricted to those present in the labels
        let classes: Vec<Category> = Category::all()
            .iter()
            .copied()
            .filter(|c| labels.contains(c))
            .collect();

        let n_samples = rows.len() as f64;
        let mut class_log_prior = Vec::with_capacity(classes.len());
        let mut feature_log_prob = Vec::with_capacity(classes.len());

        for class in &classes {
            let mut feature_counts = vec![0.0; n_features];
            let mut class_count = 0usize;

            for (row, label) in rows.iter().zip(labels) {
                if label == class {
                    class_count += 1;
                    for (idx, value) in row.iter().enumerate() {
                        feature_counts[idx] += value;
                    }
                }
            }

            class_log_prior.push((class_count as f64 / n_samples).ln());

            let total: f64 = feature_counts.iter().sum();
            let denom = total + alpha * n_features as f64;
            let log_probs = feature_counts
                .iter()
                .map(|count| ((count + alpha) / denom).ln())
                .collect();
            feature_log_prob.push(log_probs);
        }

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Posterior probabilities for one feature row, aligned with `classes()`.
    pub fn predict_proba(&self, row: &[f64]) -> Vec<f64> {
        let mut joint: Vec<f64> = self
            .classes
            .iter()
            .enumerate()
            .map(|(ci, _)| {
                let mut score = self.class_log_prior[ci];
                for (fi, value) in row.iter().enumerate() {
                    if *value != 0.0 {
                        score += value * self.feature_log_prob[ci][fi];
                    }
                }
                score
            })
            .collect();

        // Normalize in log space to avoid underflow
        let max = joint.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for score in &mut joint {
            *score = (*score - max).exp();
        }
        let sum: f64 = joint.iter().sum();
        for score in &mut joint {
            *score /= sum;
        }
        joint
    }

    /// Most probable class for one feature row, with its posterior probability.
    pub fn predict(&self, row: &[f64]) -> (Category, f64) {
        let proba = self.predict_proba(row);
        let (best, confidence) = proba
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (idx, p)| {
                if *p > acc.1 {
                    (idx, *p)
                } else {
                    acc
                }
            });
        (self.classes[best], confidence)
    }

    pub fn classes(&self) -> &[Category] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_fit() -> MultinomialNb {
        // Feature 0/1 fire for Food, feature 2/3 for Transport
        let rows = vec![
            vec![1.0, 0.5, 0.0, 0.0],
            vec![0.8, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.7],
            vec![0.0, 0.0, 0.6, 1.0],
        ];
        let labels = vec![
            Category::Food,
            Category::Food,
            Category::Transport,
            Category::Transport,
        ];
        MultinomialNb::fit(&rows, &labels, ALPHA).unwrap()
    }

    #[test]
    fn test_fit_empty_fails() {
        assert!(MultinomialNb::fit(&[], &[], ALPHA).is_err());
    }

    #[test]
    fn test_separable_classes() {
        let nb = separable_fit();

        let (cat, conf) = nb.predict(&[0.9, 0.9, 0.0, 0.0]);
        assert_eq!(cat, Category::Food);
        assert!(conf > 0.5);

        let (cat, conf) = nb.predict(&[0.0, 0.0, 0.9, 0.9]);
        assert_eq!(cat, Category::Transport);
        assert!(conf > 0.5);
    }

    #[test]
    fn test_proba_sums_to_one() {
        let nb = separable_fit();
        let proba = nb.predict_proba(&[0.5, 0.0, 0.5, 0.0]);
        let sum: f64 = proba.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(proba.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_deterministic() {
        let nb = separable_fit();
        let row = [0.3, 0.1, 0.2, 0.0];
        assert_eq!(nb.predict(&row), nb.predict(&row));
    }

    #[test]
    fn test_zero_row_falls_back_to_prior() {
        // Unbalanced priors: 3 Food, 1 Transport
        let rows = vec![
            vec![1.0, 0.0],
            vec![1.0, 0.0],
            vec![0.9, 0.0],
            vec![0.0, 1.0],
        ];
        let labels = vec![
            Category::Food,
            Category::Food,
            Category::Food,
            Category::Transport,
        ];
        let nb = MultinomialNb::fit(&rows, &labels, ALPHA).unwrap();

        let (cat, conf) = nb.predict(&[0.0, 0.0]);
        assert_eq!(cat, Category::Food);
        assert!(conf > 0.5 && conf <= 1.0);
    }

    #[test]
    fn test_classes_in_taxonomy_order() {
        let rows = vec![vec![1.0], vec![0.5]];
        let labels = vec![Category::Income, Category::Food];
        let nb = MultinomialNb::fit(&rows, &labels, ALPHA).unwrap();
        assert_eq!(nb.classes(), &[Category::Food, Category::Income]);
    }
}
