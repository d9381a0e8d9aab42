//! Spam classification types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// Class of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Legitimate message (training label 0)
    #[serde(rename = "Not Spam")]
    Ham,
    /// Spam message (training label 1)
    #[serde(rename = "Spam")]
    Spam,
}

impl Label {
    /// Parse a numeric training label: 0 = legitimate, 1 = spam
    pub fn from_int(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::Ham),
            1 => Ok(Self::Spam),
            other => Err(ClassifierError::Validation(format!(
                "Labels must be 0 (not spam) or 1 (spam), got {}",
                other
            ))),
        }
    }

    /// Column of this class in probability pairs
    pub fn index(self) -> usize {
        match self {
            Self::Ham => 0,
            Self::Spam => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ham => "Not Spam",
            Self::Spam => "Spam",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled training example
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    pub text: String,
    pub label: Label,
}

impl TrainingRecord {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Probabilities reported for a classified message, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Winning class
    #[serde(rename = "prediction")]
    pub label: Label,
    /// Probability of the winning class
    pub confidence: f64,
    pub spam_probability: f64,
    pub ham_probability: f64,
}

/// Message carried by `Prediction::Untrained`
pub const UNTRAINED_MESSAGE: &str = "Model not trained";

/// Result of a prediction; callers must branch on `Untrained`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Prediction {
    /// No training call has succeeded yet
    Untrained { message: String },
    /// The message was classified
    Classified(Classification),
}

impl Prediction {
    pub fn untrained() -> Self {
        Self::Untrained {
            message: UNTRAINED_MESSAGE.to_string(),
        }
    }

    pub fn is_untrained(&self) -> bool {
        matches!(self, Self::Untrained { .. })
    }

    pub fn classification(&self) -> Option<&Classification> {
        match self {
            Self::Classified(c) => Some(c),
            Self::Untrained { .. } => None,
        }
    }
}

/// Outcome of a successful training call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    /// Accuracy when re-predicting the training set itself.
    /// Training fit, not generalization accuracy.
    pub accuracy: f64,
    pub samples: usize,
    pub vocabulary_size: usize,
}

/// Descriptive model metadata
#[derive(Debug, Clone, Serialize)]
pub struct ModelStats {
    pub is_trained: bool,
    pub model_type: &'static str,
    pub vectorizer: &'static str,
    /// Vocabulary cap
    pub features: usize,
    /// Terms in the current vocabulary
    pub vocabulary_size: usize,
    /// Records used by the last successful training call
    pub training_samples: usize,
    pub trained_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_int() {
        assert_eq!(Label::from_int(0).unwrap(), Label::Ham);
        assert_eq!(Label::from_int(1).unwrap(), Label::Spam);
        assert!(matches!(Label::from_int(2), Err(ClassifierError::Validation(_))));
        assert!(Label::from_int(-1).is_err());
    }

    #[test]
    fn test_prediction_serialization() {
        let untrained = serde_json::to_value(Prediction::untrained()).unwrap();
        assert_eq!(
            untrained,
            serde_json::json!({ "status": "untrained", "message": "Model not trained" })
        );

        let classified = Prediction::Classified(Classification {
            label: Label::Spam,
            confidence: 90.0,
            spam_probability: 90.0,
            ham_probability: 10.0,
        });
        let value = serde_json::to_value(&classified).unwrap();
        assert_eq!(value["status"], "classified");
        assert_eq!(value["prediction"], "Spam");
        assert_eq!(value["ham_probability"], 10.0);
    }
}
