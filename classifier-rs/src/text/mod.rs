//! Text normalization
//!
//! Stopword sets, base-form reduction and the preprocessing pipeline that
//! runs before vectorization.

pub mod lemmatizer;
pub mod preprocess;
pub mod stopwords;

pub use lemmatizer::Lemmatizer;
pub use preprocess::Preprocessor;
