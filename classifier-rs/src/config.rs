//! Configuration for classifier-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClassifierError, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Model hyperparameters
    #[serde(default)]
    pub model: ModelConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind host (e.g., "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Verbose logging
    #[serde(default)]
    pub debug: bool,
}

/// Model configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Vocabulary cap of the TF-IDF vectorizer
    #[serde(default = "default_max_features")]
    pub max_features: usize,
    /// Additive smoothing constant of the Naive Bayes classifier
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Minimum number of records accepted by a training call
    #[serde(default = "default_min_training_samples")]
    pub min_training_samples: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_features() -> usize {
    5000
}

fn default_alpha() -> f64 {
    1.0
}

fn default_min_training_samples() -> usize {
    10
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_features: default_max_features(),
            alpha: default_alpha(),
            min_training_samples: default_min_training_samples(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClassifierError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ClassifierError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Apply CLASSIFIER_HOST, CLASSIFIER_PORT and CLASSIFIER_DEBUG overrides
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CLASSIFIER_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("CLASSIFIER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| ClassifierError::Config(format!("Invalid CLASSIFIER_PORT '{}': {}", port, e)))?;
        }

        if let Some(debug) = lookup("CLASSIFIER_DEBUG") {
            self.server.debug = matches!(debug.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        Ok(())
    }

    /// Socket address string the server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ClassifierError::Config("Port must be non-zero".to_string()));
        }

        if self.model.max_features == 0 {
            return Err(ClassifierError::Config("max_features must be at least 1".to_string()));
        }

        if self.model.alpha.is_nan() || self.model.alpha <= 0.0 {
            return Err(ClassifierError::Config(format!(
                "alpha must be positive, got {}",
                self.model.alpha
            )));
        }

        if self.model.min_training_samples < 2 {
            return Err(ClassifierError::Config(
                "min_training_samples must be at least 2".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ClassifierError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}
