//! Catalog item type.
//!
//! The engine imposes no file format: an external collaborator (CSV
//! loader, synthetic generator, anything else) supplies `Vec<Item>` to
//! [`RecommendationEngine::load`](crate::recommend::RecommendationEngine::load).

use serde::{Deserialize, Serialize};

/// One catalog record. Immutable once loaded into a build cycle.
///
/// `title` is intended to be unique; when duplicates occur, the last
/// occurrence wins title resolution (documented last-write-wins policy,
/// see [`TitleResolver`](crate::recommend::TitleResolver)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable external identifier
    pub id: u64,
    /// Display title, used for lookup
    pub title: String,
    /// Single text feature field, e.g. `"Action|Comedy"`
    pub feature_text: String,
    /// Catalog rating, carried through untouched
    pub rating: f64,
}

impl Item {
    /// Create a new item.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::recommend::Item;
    ///
    /// let item = Item::new(1, "Alpha (2000)", "Action|Comedy", 7.2);
    /// assert_eq!(item.title, "Alpha (2000)");
    /// ```
    pub fn new(
        id: u64,
        title: impl Into<String>,
        feature_text: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            feature_text: feature_text.into(),
            rating,
        }
    }
}
