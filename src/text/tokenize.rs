//! Tokenization strategies for feature text.

use crate::error::Result;
use crate::text::Tokenizer;

/// Tokenizer that splits on a single delimiter character.
///
/// Suited to tag-style feature text such as `"Action|Comedy|Drama"`.
/// Tokens are trimmed and empty segments are dropped.
///
/// # Examples
///
/// ```
/// use sugerir::text::{Tokenizer, tokenize::DelimiterTokenizer};
///
/// let tokenizer = DelimiterTokenizer::new('|');
/// let tokens = tokenizer.tokenize("Action|Comedy| Drama").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Action", "Comedy", "Drama"]);
///
/// // Empty segments are dropped
/// let tokens = tokenizer.tokenize("Action||").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Action"]);
/// ```
#[derive(Debug, Clone)]
pub struct DelimiterTokenizer {
    delimiter: char,
}

impl DelimiterTokenizer {
    /// Create a tokenizer splitting on `delimiter`.
    #[must_use]
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for DelimiterTokenizer {
    /// The pipe delimiter used by tag-list feature text.
    fn default() -> Self {
        Self::new('|')
    }
}

impl Tokenizer for DelimiterTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split(self.delimiter)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect();
        Ok(tokens)
    }
}

/// Tokenizer that splits text on Unicode whitespace.
///
/// # Examples
///
/// ```
/// use sugerir::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("a space  opera").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["a", "space", "opera"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text.split_whitespace().map(ToString::to_string).collect();
        Ok(tokens)
    }
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
