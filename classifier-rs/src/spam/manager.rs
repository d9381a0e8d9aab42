//! Shared access to the spam classifier
//!
//! The pipeline is one mutable resource: predictions hold the read lock,
//! training holds the write lock for the whole fit-and-swap, so a
//! vocabulary is never paired with weights from another model generation.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::dataset::seed_records;
use super::pipeline::SpamClassifier;
use super::types::*;
use crate::config::ModelConfig;
use crate::error::Result;

/// Spam manager
#[derive(Clone)]
pub struct SpamManager {
    classifier: Arc<RwLock<SpamClassifier>>,
}

impl SpamManager {
    /// Create a manager around an untrained classifier
    pub fn new(config: ModelConfig) -> Self {
        Self::with_classifier(SpamClassifier::new(config))
    }

    /// Wrap an existing classifier
    pub fn with_classifier(classifier: SpamClassifier) -> Self {
        Self {
            classifier: Arc::new(RwLock::new(classifier)),
        }
    }

    /// Train on the built-in seed dataset
    pub async fn seed(&self) -> Result<TrainingReport> {
        let report = self.train(&seed_records()).await?;
        info!("Model trained with accuracy: {:.2}", report.accuracy);
        Ok(report)
    }

    /// Retrain from labeled records
    pub async fn train(&self, records: &[TrainingRecord]) -> Result<TrainingReport> {
        let mut classifier = self.classifier.write().await;
        let result = classifier.train(records);
        log_training(&result);
        result
    }

    /// Retrain from parallel text/label arrays
    pub async fn train_texts(&self, texts: &[String], labels: &[i64]) -> Result<TrainingReport> {
        let mut classifier = self.classifier.write().await;
        let result = classifier.train_texts(texts, labels);
        log_training(&result);
        result
    }

    /// Classify a message
    pub async fn predict(&self, text: &str) -> Result<Prediction> {
        let classifier = self.classifier.read().await;
        let prediction = classifier.predict(text)?;

        match &prediction {
            Prediction::Classified(c) => {
                debug!("Classified as {} ({:.1}% confidence)", c.label, c.confidence)
            }
            Prediction::Untrained { .. } => warn!("Prediction requested before the model was trained"),
        }

        Ok(prediction)
    }

    /// Model metadata
    pub async fn stats(&self) -> ModelStats {
        self.classifier.read().await.stats()
    }
}

fn log_training(result: &Result<TrainingReport>) {
    match result {
        Ok(report) => info!(
            "Trained on {} samples ({} terms), training accuracy {:.2}",
            report.samples, report.vocabulary_size, report.accuracy
        ),
        Err(e) => warn!("Training rejected: {}", e),
    }
}
