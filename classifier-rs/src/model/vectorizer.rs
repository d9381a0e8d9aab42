//! TF-IDF vectorizer
//!
//! Learns a capped vocabulary from a corpus and maps documents onto
//! L2-normalized TF-IDF rows over that vocabulary.

use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use super::sparse::{SparseMatrix, SparseRow};
use crate::error::{ClassifierError, Result};
use crate::text::stopwords::is_vectorizer_stop_word;

/// Tokens of two or more word characters
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?u)\b\w\w+\b").expect("token pattern is a valid regex")
});

/// Default vocabulary cap
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Fitted state: term -> column plus per-column idf
#[derive(Debug, Clone)]
struct Fitted {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

/// TF-IDF vectorizer with an English stopword filter
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
    fitted: Option<Fitted>,
}

impl TfidfVectorizer {
    /// Create an unfitted vectorizer keeping at most `max_features` terms
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            fitted: None,
        }
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Number of terms in the current vocabulary (0 when unfitted)
    pub fn vocabulary_size(&self) -> usize {
        self.fitted.as_ref().map_or(0, |f| f.vocabulary.len())
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.fitted
            .as_ref()
            .is_some_and(|f| f.vocabulary.contains_key(term))
    }

    /// Vocabulary terms in column order
    pub fn terms(&self) -> Vec<String> {
        let Some(fitted) = &self.fitted else {
            return Vec::new();
        };
        let mut terms: Vec<(&String, &usize)> = fitted.vocabulary.iter().collect();
        terms.sort_by_key(|&(_, &col)| col);
        terms.into_iter().map(|(term, _)| term.clone()).collect()
    }

    /// Learn a fresh vocabulary from `documents` and return their TF-IDF rows.
    ///
    /// The previous vocabulary is discarded; on error the vectorizer is left
    /// as it was.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<SparseMatrix> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| analyze(d.as_ref())).collect();

        // BTreeMap keeps terms in lexical order for tie-breaking and indexing
        let mut term_freq: BTreeMap<&str, usize> = BTreeMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();

        for tokens in &tokenized {
            let mut seen: Vec<&str> = Vec::with_capacity(tokens.len());
            for token in tokens {
                *term_freq.entry(token.as_str()).or_insert(0) += 1;
                if !seen.contains(&token.as_str()) {
                    seen.push(token.as_str());
                    *doc_freq.entry(token.as_str()).or_insert(0) += 1;
                }
            }
        }

        if term_freq.is_empty() {
            return Err(ClassifierError::EmptyVocabulary);
        }

        let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
        // Stable sort over lexically ordered input: ties stay lexical
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.max_features);

        let mut selected: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        selected.sort_unstable();

        let n_docs = documents.len() as f64;
        let idf = selected
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();
        let vocabulary = selected
            .iter()
            .enumerate()
            .map(|(col, term)| (term.to_string(), col))
            .collect();

        let fitted = Fitted { vocabulary, idf };
        let matrix = weigh(&fitted, &tokenized);
        self.fitted = Some(fitted);

        Ok(matrix)
    }

    /// Map `documents` onto the fitted vocabulary. Unknown terms are ignored.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<SparseMatrix> {
        let fitted = self.fitted.as_ref().ok_or(ClassifierError::NotFitted)?;
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| analyze(d.as_ref())).collect();
        Ok(weigh(fitted, &tokenized))
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

/// Lowercase, extract word tokens, drop stopwords
fn analyze(document: &str) -> Vec<String> {
    let lowered = document.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_vectorizer_stop_word(token))
        .map(str::to_string)
        .collect()
}

fn weigh(fitted: &Fitted, tokenized: &[Vec<String>]) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(fitted.idf.len());

    for tokens in tokenized {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&col) = fitted.vocabulary.get(token) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseRow = counts
            .into_iter()
            .map(|(col, tf)| (col, tf * fitted.idf[col]))
            .collect();

        let norm = row.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for entry in &mut row {
                entry.1 /= norm;
            }
        }

        matrix.push_row(row);
    }

    matrix
}
