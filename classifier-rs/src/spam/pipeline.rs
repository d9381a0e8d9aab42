//! Spam classification pipeline
//!
//! Preprocess -> TF-IDF vectorize -> multinomial Naive Bayes. Training fits
//! a fresh vectorizer/classifier pair and swaps it in only when every step
//! succeeded, so a rejected call leaves the previous model untouched.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::types::*;
use crate::config::ModelConfig;
use crate::error::{ClassifierError, Result};
use crate::model::{MultinomialNb, TfidfVectorizer};
use crate::text::Preprocessor;

pub const MODEL_TYPE: &str = "Multinomial Naive Bayes";
pub const VECTORIZER_TYPE: &str = "TF-IDF";

/// Trainable spam classifier
#[derive(Debug)]
pub struct SpamClassifier {
    config: ModelConfig,
    preprocessor: Preprocessor,
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
    is_trained: bool,
    training_samples: usize,
    trained_at: Option<DateTime<Utc>>,
}

impl SpamClassifier {
    /// Create an untrained classifier
    pub fn new(config: ModelConfig) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(config.max_features),
            classifier: MultinomialNb::new(config.alpha),
            preprocessor: Preprocessor::new(),
            config,
            is_trained: false,
            training_samples: 0,
            trained_at: None,
        }
    }

    pub fn is_trained(&self) -> bool {
        self.is_trained
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// Train from parallel text/label sequences as received at the API boundary
    pub fn train_texts(&mut self, texts: &[String], labels: &[i64]) -> Result<TrainingReport> {
        if texts.len() != labels.len() {
            return Err(ClassifierError::Validation(
                "Number of texts and labels must match".to_string(),
            ));
        }

        self.check_sample_count(texts.len())?;

        let records = texts
            .iter()
            .zip(labels)
            .map(|(text, &label)| Ok(TrainingRecord::new(text.clone(), Label::from_int(label)?)))
            .collect::<Result<Vec<_>>>()?;

        self.train(&records)
    }

    /// Fit vectorizer and classifier on `records`, replacing any prior model.
    ///
    /// The returned accuracy is measured on the training set itself.
    pub fn train(&mut self, records: &[TrainingRecord]) -> Result<TrainingReport> {
        self.check_sample_count(records.len())?;

        let documents: Vec<String> = records
            .iter()
            .map(|r| self.preprocessor.preprocess(&r.text))
            .collect();
        let labels: Vec<Label> = records.iter().map(|r| r.label).collect();

        let mut vectorizer = TfidfVectorizer::new(self.config.max_features);
        let mut classifier = MultinomialNb::new(self.config.alpha);

        let features = vectorizer.fit_transform(&documents)?;
        classifier.fit(&features, &labels)?;

        let predicted = classifier.predict(&features)?;
        let correct = predicted.iter().zip(&labels).filter(|(p, l)| p == l).count();
        let accuracy = correct as f64 / labels.len() as f64;

        debug!(
            "Fitted {} samples, vocabulary of {} terms",
            records.len(),
            vectorizer.vocabulary_size()
        );

        let report = TrainingReport {
            accuracy,
            samples: records.len(),
            vocabulary_size: vectorizer.vocabulary_size(),
        };

        self.vectorizer = vectorizer;
        self.classifier = classifier;
        self.is_trained = true;
        self.training_samples = records.len();
        self.trained_at = Some(Utc::now());

        Ok(report)
    }

    /// Classify a message with the current model.
    ///
    /// Returns `Prediction::Untrained` rather than an error when no training
    /// call has succeeded yet.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        if !self.is_trained {
            return Ok(Prediction::untrained());
        }

        let document = self.preprocessor.preprocess(text);
        let features = match self.vectorizer.transform(&[document]) {
            Ok(features) => features,
            Err(ClassifierError::NotFitted) => return Ok(Prediction::untrained()),
            Err(e) => return Err(e),
        };

        let label = self
            .classifier
            .predict(&features)?
            .into_iter()
            .next()
            .ok_or_else(|| ClassifierError::Unexpected("Classifier returned no prediction".to_string()))?;
        let [ham, spam] = self
            .classifier
            .predict_proba(&features)?
            .into_iter()
            .next()
            .ok_or_else(|| ClassifierError::Unexpected("Classifier returned no probabilities".to_string()))?;

        Ok(Prediction::Classified(Classification {
            label,
            confidence: ham.max(spam) * 100.0,
            spam_probability: spam * 100.0,
            ham_probability: ham * 100.0,
        }))
    }

    /// Model metadata
    pub fn stats(&self) -> ModelStats {
        ModelStats {
            is_trained: self.is_trained,
            model_type: MODEL_TYPE,
            vectorizer: VECTORIZER_TYPE,
            features: self.config.max_features,
            vocabulary_size: self.vectorizer.vocabulary_size(),
            training_samples: self.training_samples,
            trained_at: self.trained_at,
        }
    }

    fn check_sample_count(&self, count: usize) -> Result<()> {
        if count < self.config.min_training_samples {
            return Err(ClassifierError::Validation(format!(
                "Please provide at least {} samples for training",
                self.config.min_training_samples
            )));
        }
        Ok(())
    }
}

impl Default for SpamClassifier {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spam::dataset::seed_records;

    fn trained() -> SpamClassifier {
        let mut classifier = SpamClassifier::default();
        classifier.train(&seed_records()).unwrap();
        classifier
    }

    fn classification(prediction: Prediction) -> Classification {
        match prediction {
            Prediction::Classified(c) => c,
            Prediction::Untrained { .. } => panic!("expected a classification"),
        }
    }

    #[test]
    fn test_untrained_returns_sentinel() {
        let classifier = SpamClassifier::default();
        assert!(!classifier.is_trained());
        assert_eq!(classifier.predict("anything").unwrap(), Prediction::untrained());
    }

    #[test]
    fn test_seed_training() {
        let mut classifier = SpamClassifier::default();
        let report = classifier.train(&seed_records()).unwrap();

        assert!(classifier.is_trained());
        assert!(report.accuracy > 0.5);
        assert_eq!(report.samples, 10);
        assert!(report.vocabulary_size > 0);
    }

    #[test]
    fn test_predicts_ham() {
        let result = classification(trained().predict("Hi there, how are you?").unwrap());
        assert_eq!(result.label, Label::Ham);
        assert!(result.ham_probability > 50.0);
    }

    #[test]
    fn test_predicts_spam() {
        let result = classification(
            trained()
                .predict("URGENT! You have WON a FREE prize, call now!")
                .unwrap(),
        );
        assert_eq!(result.label, Label::Spam);
        assert!(result.spam_probability > 50.0);
    }

    #[test]
    fn test_probabilities_are_consistent() {
        let result = classification(trained().predict("free prize").unwrap());
        assert!((result.spam_probability + result.ham_probability - 100.0).abs() < 1e-9);
        assert_eq!(
            result.confidence,
            result.spam_probability.max(result.ham_probability)
        );
    }

    #[test]
    fn test_too_few_records_rejected_without_mutation() {
        let mut classifier = trained();
        let before = classifier.predict("free prize").unwrap();

        let nine: Vec<TrainingRecord> = seed_records().into_iter().take(9).collect();
        let err = classifier.train(&nine).unwrap_err();

        assert!(matches!(err, ClassifierError::Validation(_)));
        assert!(classifier.is_trained());
        assert_eq!(classifier.predict("free prize").unwrap(), before);
    }

    #[test]
    fn test_mismatched_lengths_rejected_without_mutation() {
        let mut classifier = SpamClassifier::default();
        let texts: Vec<String> = seed_records().into_iter().map(|r| r.text).collect();
        let labels = vec![1, 0, 1, 0, 1, 0, 1, 0, 1];

        let err = classifier.train_texts(&texts, &labels).unwrap_err();
        assert!(matches!(err, ClassifierError::Validation(_)));
        assert!(!classifier.is_trained());
    }

    #[test]
    fn test_invalid_label_rejected() {
        let mut classifier = SpamClassifier::default();
        let texts: Vec<String> = seed_records().into_iter().map(|r| r.text).collect();
        let labels = vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 2];
        assert!(classifier.train_texts(&texts, &labels).is_err());
        assert!(!classifier.is_trained());
    }

    #[test]
    fn test_stopword_only_corpus_rejected_without_mutation() {
        let mut classifier = trained();
        let vocabulary = classifier.vectorizer().vocabulary_size();

        let records: Vec<TrainingRecord> = (0..10)
            .map(|i| TrainingRecord::new("the and of 123", if i % 2 == 0 { Label::Spam } else { Label::Ham }))
            .collect();
        let err = classifier.train(&records).unwrap_err();

        assert!(matches!(err, ClassifierError::EmptyVocabulary));
        assert_eq!(classifier.vectorizer().vocabulary_size(), vocabulary);
    }

    #[test]
    fn test_retraining_replaces_vocabulary() {
        let mut classifier = SpamClassifier::default();

        let first: Vec<TrainingRecord> = (0..10)
            .map(|i| {
                if i % 2 == 0 {
                    TrainingRecord::new("zebra lottery jackpot", Label::Spam)
                } else {
                    TrainingRecord::new("lunch meeting tomorrow", Label::Ham)
                }
            })
            .collect();
        classifier.train(&first).unwrap();
        assert!(classifier.vectorizer().contains_term("zebra"));

        let second: Vec<TrainingRecord> = (0..10)
            .map(|i| {
                if i % 2 == 0 {
                    TrainingRecord::new("lottery jackpot winner", Label::Spam)
                } else {
                    TrainingRecord::new("lunch meeting tomorrow", Label::Ham)
                }
            })
            .collect();
        classifier.train(&second).unwrap();
        assert!(!classifier.vectorizer().contains_term("zebra"));

        // "zebra" now contributes nothing: same outcome as an empty message
        let with_term = classifier.predict("zebra").unwrap();
        let without = classifier.predict("").unwrap();
        assert_eq!(with_term, without);
    }

    #[test]
    fn test_stats() {
        let untrained = SpamClassifier::default().stats();
        assert!(!untrained.is_trained);
        assert_eq!(untrained.features, 5000);
        assert!(untrained.trained_at.is_none());

        let stats = trained().stats();
        assert!(stats.is_trained);
        assert_eq!(stats.model_type, "Multinomial Naive Bayes");
        assert_eq!(stats.vectorizer, "TF-IDF");
        assert_eq!(stats.training_samples, 10);
        assert!(stats.trained_at.is_some());
    }
}
