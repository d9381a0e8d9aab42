//! Spam classification module
//!
//! Text preprocessing, TF-IDF vectorization and Naive Bayes classification
//! composed into a trainable pipeline, shared behind a lock.

pub mod dataset;
pub mod manager;
pub mod pipeline;
pub mod types;

pub use manager::SpamManager;
pub use pipeline::SpamClassifier;
pub use types::*;
