//! Title resolution: exact lookup with an approximate fallback.
//!
//! Exact matches are case-sensitive and always win. When exact lookup
//! fails, candidates are scored with a positional character-overlap
//! ratio over lower-cased strings. The heuristic is deliberately cheap
//! and is preserved as a compatibility contract; it is weaker than edit
//! distance and is not recommended for new designs.

use crate::error::{Result, SugerirError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum overlap ratio an approximate candidate must strictly exceed.
pub const APPROX_THRESHOLD: f64 = 0.5;

/// How a query title was matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchKind {
    /// Byte-for-byte title match.
    Exact,
    /// Positional-overlap fallback match.
    Approximate {
        /// Overlap ratio of the winning candidate
        ratio: f64,
    },
}

/// A successful title resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Catalog index of the matched item
    pub index: usize,
    /// The catalog title that matched (differs from the query on
    /// approximate matches; callers should report the substitution)
    pub matched_title: String,
    /// Whether the match was exact or approximate
    pub kind: MatchKind,
}

/// Maps query titles to catalog indices.
///
/// Duplicate titles follow an explicit last-write-wins policy: the
/// later catalog occurrence overwrites the earlier mapping.
///
/// # Examples
///
/// ```
/// use sugerir::recommend::resolve::{MatchKind, TitleResolver};
///
/// let resolver = TitleResolver::new(["Alpha (2000)", "Beta (2001)"]);
///
/// let exact = resolver.resolve("Alpha (2000)").expect("resolves");
/// assert_eq!(exact.index, 0);
/// assert_eq!(exact.kind, MatchKind::Exact);
///
/// // Wrong case falls back to the overlap heuristic.
/// let approx = resolver.resolve("alpha (2000)").expect("resolves");
/// assert_eq!(approx.index, 0);
/// assert!(matches!(approx.kind, MatchKind::Approximate { ratio } if ratio == 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct TitleResolver {
    /// Titles in catalog order, for the approximate scan
    titles: Vec<String>,
    /// Title to catalog index, last write wins
    index: HashMap<String, usize>,
}

impl TitleResolver {
    /// Build a resolver from catalog titles in catalog order.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        let index = titles
            .iter()
            .enumerate()
            .map(|(idx, title)| (title.clone(), idx))
            .collect();
        Self { titles, index }
    }

    /// Number of catalog titles (duplicates included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the resolver holds no titles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Resolve a query title to a catalog index.
    ///
    /// Exact match first; otherwise the candidate with the strictly
    /// highest overlap ratio above [`APPROX_THRESHOLD`] wins, earlier
    /// catalog entries winning ratio ties.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::ItemNotFound`] carrying the best
    /// sub-threshold candidate (diagnostic only, never substituted).
    pub fn resolve(&self, query: &str) -> Result<Resolution> {
        if let Some(&index) = self.index.get(query) {
            return Ok(Resolution {
                index,
                matched_title: query.to_string(),
                kind: MatchKind::Exact,
            });
        }

        let mut best: Option<(&str, f64)> = None;
        for title in &self.titles {
            let ratio = positional_overlap(query, title);
            // Strictly greater only: the first candidate in catalog
            // order keeps a tie.
            if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
                best = Some((title, ratio));
            }
        }

        match best {
            Some((title, ratio)) if ratio > APPROX_THRESHOLD => {
                // Duplicates resolve through the index map: last
                // occurrence wins, same as the exact path.
                let index = self.index[title];
                Ok(Resolution {
                    index,
                    matched_title: title.to_string(),
                    kind: MatchKind::Approximate { ratio },
                })
            }
            Some((title, ratio)) => Err(SugerirError::ItemNotFound {
                query: query.to_string(),
                closest: Some((title.to_string(), ratio)),
            }),
            None => Err(SugerirError::ItemNotFound {
                query: query.to_string(),
                closest: None,
            }),
        }
    }
}

/// Positional character-overlap ratio between two strings.
///
/// Both strings are lower-cased; the ratio is the count of positions
/// where the characters agree (over the shorter length) divided by the
/// longer length in characters. 1.0 means equal after case-folding.
///
/// # Examples
///
/// ```
/// use sugerir::recommend::resolve::positional_overlap;
///
/// assert_eq!(positional_overlap("Alpha", "alpha"), 1.0);
/// assert_eq!(positional_overlap("abcd", "abXX"), 0.5);
/// assert_eq!(positional_overlap("", "abc"), 0.0);
/// ```
#[must_use]
pub fn positional_overlap(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 0.0;
    }
    let matching = a
        .chars()
        .zip(b.chars())
        .filter(|(ca, cb)| ca == cb)
        .count();
    matching as f64 / longer as f64
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
