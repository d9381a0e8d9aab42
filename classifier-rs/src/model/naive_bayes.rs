//! Multinomial Naive Bayes over TF-IDF features

use super::sparse::SparseMatrix;
use crate::error::{ClassifierError, Result};
use crate::spam::Label;

/// Default additive smoothing constant
pub const DEFAULT_ALPHA: f64 = 1.0;

const N_CLASSES: usize = 2;

/// Learned parameters, indexed by `Label::index()`
#[derive(Debug, Clone)]
struct Parameters {
    class_log_prior: [f64; N_CLASSES],
    feature_log_prob: [Vec<f64>; N_CLASSES],
}

/// Two-class multinomial Naive Bayes with Lidstone smoothing
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    alpha: f64,
    params: Option<Parameters>,
}

impl MultinomialNb {
    /// Create an unfitted classifier
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            params: None,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    /// Estimate class priors and smoothed feature likelihoods.
    ///
    /// Replaces all previously learned parameters. Both classes must be
    /// present in `labels`.
    pub fn fit(&mut self, features: &SparseMatrix, labels: &[Label]) -> Result<()> {
        if features.n_rows() != labels.len() {
            return Err(ClassifierError::Validation(format!(
                "Feature matrix has {} rows but {} labels were given",
                features.n_rows(),
                labels.len()
            )));
        }

        let n_features = features.n_cols();
        let mut class_count = [0usize; N_CLASSES];
        let mut feature_count = [vec![0.0f64; n_features], vec![0.0f64; n_features]];

        for (row, label) in features.rows().iter().zip(labels) {
            let class = label.index();
            class_count[class] += 1;
            for &(col, value) in row {
                feature_count[class][col] += value;
            }
        }

        if class_count.iter().any(|&count| count == 0) {
            return Err(ClassifierError::Validation(
                "Training data must contain both spam and legitimate examples".to_string(),
            ));
        }

        let total = labels.len() as f64;
        let class_log_prior = class_count.map(|count| (count as f64 / total).ln());

        let alpha = self.alpha;
        let feature_log_prob = feature_count.map(|counts| {
            let denominator: f64 = counts.iter().map(|c| c + alpha).sum();
            counts
                .iter()
                .map(|c| ((c + alpha) / denominator).ln())
                .collect::<Vec<_>>()
        });

        self.params = Some(Parameters {
            class_log_prior,
            feature_log_prob,
        });

        Ok(())
    }

    /// Most probable label per row; ties resolve to `Label::Ham`
    pub fn predict(&self, features: &SparseMatrix) -> Result<Vec<Label>> {
        Ok(self
            .joint_log_likelihood(features)?
            .into_iter()
            .map(|jll| if jll[1] > jll[0] { Label::Spam } else { Label::Ham })
            .collect())
    }

    /// `[P(ham), P(spam)]` per row
    pub fn predict_proba(&self, features: &SparseMatrix) -> Result<Vec<[f64; 2]>> {
        Ok(self
            .joint_log_likelihood(features)?
            .into_iter()
            .map(|jll| {
                let max = jll[0].max(jll[1]);
                let log_norm = max + ((jll[0] - max).exp() + (jll[1] - max).exp()).ln();
                [(jll[0] - log_norm).exp(), (jll[1] - log_norm).exp()]
            })
            .collect())
    }

    fn joint_log_likelihood(&self, features: &SparseMatrix) -> Result<Vec<[f64; N_CLASSES]>> {
        let params = self.params.as_ref().ok_or(ClassifierError::NotFitted)?;

        let expected = params.feature_log_prob[0].len();
        if features.n_cols() != expected {
            return Err(ClassifierError::Unexpected(format!(
                "X has {} features, but the classifier expects {}",
                features.n_cols(),
                expected
            )));
        }

        Ok(features
            .rows()
            .iter()
            .map(|row| {
                let mut jll = params.class_log_prior;
                for (class, score) in jll.iter_mut().enumerate() {
                    *score += row
                        .iter()
                        .map(|&(col, value)| value * params.feature_log_prob[class][col])
                        .sum::<f64>();
                }
                jll
            })
            .collect())
    }
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}
