//! Stop words filtering for feature text preprocessing.
//!
//! Stop words are common words ("the", "is", "at") that carry little
//! discriminating weight. Filtering them matters for whitespace-tokenized
//! free text; tag-style feature text rarely contains any.

use std::collections::HashSet;

/// Default English stop words, the common core of the NLTK and
/// scikit-learn lists.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

/// Stop words filter with O(1) case-insensitive lookup.
///
/// # Examples
///
/// ```
/// use sugerir::text::stopwords::StopWordsFilter;
///
/// let filter = StopWordsFilter::english();
/// assert!(filter.is_stop_word("The"));
/// assert!(!filter.is_stop_word("thriller"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stored lowercase for case-insensitive matching
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(["foo", "bar"]);
    /// assert!(filter.is_stop_word("FOO"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        Self { stop_words }
    }

    /// Create a filter with the default English stop words.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Whether the token is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(&token.to_lowercase())
    }

    /// Remove stop words from a token list, preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// let tokens = vec!["the", "quick", "brown", "fox"];
    /// let filtered = filter.filter(&tokens);
    /// assert_eq!(filtered, vec!["quick", "brown", "fox"]);
    /// ```
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !self.is_stop_word(t))
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
