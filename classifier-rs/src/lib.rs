//! classifier-rs: spam/ham text classification service
//!
//! A small web service that classifies short messages as spam or legitimate
//! using a bag-of-words model.
//!
//! # Features
//!
//! - **Preprocessing**: lowercase, symbol stripping, Unicode word
//!   segmentation, stopword removal, base-form reduction
//! - **Model**: TF-IDF vectorizer feeding a multinomial Naive Bayes classifier
//! - **Retraining**: supervised retraining over HTTP, atomic per call
//! - **API**: `POST /classify`, `POST /train`, `GET /stats` and a web UI
//!
//! # Example
//!
//! ```no_run
//! use classifier_rs::config::Config;
//! use classifier_rs::spam::SpamManager;
//! use classifier_rs::api::ApiServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let manager = SpamManager::new(config.model.clone());
//!     manager.seed().await?;
//!
//!     let server = ApiServer::new(manager, config.listen_addr());
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`text`]: Text normalization
//! - [`model`]: Vectorizer and classifier
//! - [`spam`]: Training/prediction pipeline and shared manager
//! - [`api`]: HTTP endpoints

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod spam;
pub mod text;

// Re-export commonly used types
pub use config::Config;
pub use error::{ClassifierError, Result};
