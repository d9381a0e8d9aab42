//! Text preprocessing
//!
//! Turns a raw message into the normalized token string fed to the
//! vectorizer: lowercase, strip everything but ASCII letters and whitespace,
//! split on Unicode word boundaries, drop stopwords, reduce to base forms.

use unicode_segmentation::UnicodeSegmentation;

use super::lemmatizer::Lemmatizer;
use super::stopwords::is_preprocess_stop_word;

/// Deterministic text normalizer
#[derive(Debug, Default)]
pub struct Preprocessor {
    lemmatizer: Lemmatizer,
}

impl Preprocessor {
    /// Create a new preprocessor
    pub fn new() -> Self {
        Self {
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Normalize a text into space-separated base-form tokens.
    ///
    /// Never fails; empty or punctuation-only input yields an empty string.
    pub fn preprocess(&self, text: &str) -> String {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();

        cleaned
            .unicode_words()
            .filter(|word| !is_preprocess_stop_word(word))
            .map(|word| self.lemmatizer.lemmatize(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
