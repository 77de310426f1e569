//! Text processing: tokenization, stop words, TF-IDF vectorization.
//!
//! Tokenization policy is a configuration choice, not fixed by the
//! engine: pipe-delimited tag lists (`"Action|Comedy"`) and free-form
//! whitespace text are both supported out of the box, and anything else
//! plugs in through the [`Tokenizer`] trait.

pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

use crate::error::Result;

/// Trait for tokenization strategies.
///
/// Implementations must be thread-safe: the vectorizer tokenizes
/// documents in parallel during a build.
pub trait Tokenizer: Send + Sync {
    /// Split text into discrete terms.
    ///
    /// # Errors
    ///
    /// Implementations may reject malformed input.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
