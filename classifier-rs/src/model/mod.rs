//! Statistical model components
//!
//! A TF-IDF vectorizer and a two-class multinomial Naive Bayes classifier,
//! connected through a sparse feature matrix.

pub mod naive_bayes;
pub mod sparse;
pub mod vectorizer;

pub use naive_bayes::{MultinomialNb, DEFAULT_ALPHA};
pub use sparse::{SparseMatrix, SparseRow};
pub use vectorizer::{TfidfVectorizer, DEFAULT_MAX_FEATURES};
