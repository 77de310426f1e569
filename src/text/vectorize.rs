//! TF-IDF vectorization over a per-build vocabulary.
//!
//! [`TfidfVectorizer`] is reusable configuration; each call to
//! [`TfidfVectorizer::fit`] produces an immutable [`TfidfModel`] holding
//! the vocabulary, per-term IDF, and one sparse vector per document.
//! The vocabulary never grows after a fit: terms first seen later are
//! ignored.
//!
//! # Weighting
//!
//! ```text
//! weight(t, d) = tf(t, d) × ln(N / df(t))
//! ```
//!
//! where `tf` is the raw term count in the document, `N` the number of
//! documents, and `df` the number of documents containing the term. A
//! term present in every document weighs zero.

use crate::error::{Result, SugerirError};
use crate::primitives::SparseVector;
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::DelimiterTokenizer;
use crate::text::Tokenizer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// The fixed set of distinct terms used as vector dimensions for one fit.
///
/// Ordering is assigned once per fit (document frequency descending,
/// term ascending as tie-break) and reused for every vector, so two fits
/// over the same documents produce identical dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Default for Vocabulary {
    /// An empty vocabulary (the zero-item catalog case).
    fn default() -> Self {
        Self::from_ordered_terms(Vec::new())
    }
}

impl Vocabulary {
    fn from_ordered_terms(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        Self { terms, index }
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Dimension index of a term, if present.
    #[must_use]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at a dimension index.
    #[must_use]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// All terms in dimension order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// TF-IDF vectorizer configuration.
///
/// # Examples
///
/// ```
/// use sugerir::text::vectorize::TfidfVectorizer;
///
/// let docs = vec!["Action|Comedy", "Action|Drama"];
/// let vectorizer = TfidfVectorizer::new();
/// let model = vectorizer.fit(&docs).expect("fit should succeed");
///
/// assert_eq!(model.vectors().len(), 2);
/// assert_eq!(model.vocabulary().len(), 3); // action, comedy, drama
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    lowercase: bool,
    stop_words: Option<StopWordsFilter>,
}

impl TfidfVectorizer {
    /// Create a vectorizer with the default pipe-delimiter tokenizer and
    /// lowercasing enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(DelimiterTokenizer::default()),
            lowercase: true,
            stop_words: None,
        }
    }

    /// Set the tokenizer to use.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::vectorize::TfidfVectorizer;
    /// use sugerir::text::tokenize::WhitespaceTokenizer;
    ///
    /// let vectorizer = TfidfVectorizer::new()
    ///     .with_tokenizer(Box::new(WhitespaceTokenizer::new()));
    /// ```
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether terms are lowercased before counting.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Use custom stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words.iter().copied()));
        self
    }

    /// Use English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Learn a vocabulary and produce one TF-IDF vector per document.
    ///
    /// Documents are tokenized in parallel; results are merged in
    /// document order, so output is deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::EmptyInput`] for an empty document slice,
    /// or any tokenizer error.
    pub fn fit<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Result<TfidfModel> {
        if documents.is_empty() {
            return Err(SugerirError::empty_input("documents"));
        }

        let counts: Vec<BTreeMap<String, usize>> = documents
            .par_iter()
            .map(|doc| self.term_counts(doc.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        // Document frequency per term.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc_counts in &counts {
            for term in doc_counts.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        // Stable vocabulary order: frequent terms first, ties lexical.
        let mut ordered: Vec<(&str, usize)> = df.iter().map(|(&t, &d)| (t, d)).collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = ordered.iter().map(|&(_, d)| (n_docs / d as f64).ln()).collect();
        let vocabulary =
            Vocabulary::from_ordered_terms(ordered.into_iter().map(|(t, _)| t.to_string()).collect());

        let dim = vocabulary.len();
        let vectors: Vec<SparseVector> = counts
            .par_iter()
            .map(|doc_counts| {
                let pairs = doc_counts
                    .iter()
                    .filter_map(|(term, &tf)| {
                        vocabulary
                            .index_of(term)
                            .map(|j| (j, tf as f64 * idf[j]))
                    })
                    .collect();
                SparseVector::from_pairs(dim, pairs)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TfidfModel {
            vocabulary,
            idf,
            vectors,
        })
    }

    /// Vectorize a single document against an already-fitted model.
    ///
    /// Terms absent from the model's vocabulary are ignored; the
    /// vocabulary never grows after a fit.
    ///
    /// # Errors
    ///
    /// Returns any tokenizer error.
    pub fn transform(&self, model: &TfidfModel, document: &str) -> Result<SparseVector> {
        let counts = self.term_counts(document)?;
        let pairs = counts
            .iter()
            .filter_map(|(term, &tf)| {
                model
                    .vocabulary
                    .index_of(term)
                    .map(|j| (j, tf as f64 * model.idf[j]))
            })
            .collect();
        SparseVector::from_pairs(model.vocabulary.len(), pairs)
    }

    fn term_counts(&self, text: &str) -> Result<BTreeMap<String, usize>> {
        let tokens = self.tokenizer.tokenize(text)?;
        let mut counts = BTreeMap::new();
        for token in tokens {
            let term = if self.lowercase {
                token.to_lowercase()
            } else {
                token
            };
            if let Some(sw) = &self.stop_words {
                if sw.is_stop_word(&term) {
                    continue;
                }
            }
            *counts.entry(term).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable artifact of one fit: vocabulary, IDF, and document vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfModel {
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl TfidfModel {
    /// The vocabulary learned during the fit.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Inverse document frequency per vocabulary dimension.
    #[must_use]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// One TF-IDF vector per fitted document, in document order.
    #[must_use]
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// Consume the model, returning its document vectors.
    #[must_use]
    pub fn into_vectors(self) -> Vec<SparseVector> {
        self.vectors
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
