//! Exact cosine similarity index.
//!
//! Vectors are unit-normalized at build time so cosine similarity is a
//! plain dot product. Two storage strategies, chosen by catalog size:
//!
//! - **Dense**: for catalogs up to `dense_limit` items the full N×N
//!   matrix is materialized eagerly during build, rows computed in
//!   parallel and merged in catalog order.
//! - **On demand**: larger catalogs compute a similarity row per query
//!   (O(N × d)) and keep a capped most-recently-used row cache, bounding
//!   memory at O(N × cache capacity).
//!
//! Both strategies return identical scores and orderings.
//!
//! # Examples
//!
//! ```
//! use sugerir::index::{IndexOptions, SimilarityIndex};
//! use sugerir::primitives::SparseVector;
//!
//! let vectors = vec![
//!     SparseVector::from_pairs(3, vec![(0, 1.0), (1, 1.0)]).expect("valid"),
//!     SparseVector::from_pairs(3, vec![(0, 1.0), (2, 1.0)]).expect("valid"),
//!     SparseVector::from_pairs(3, vec![(2, 1.0)]).expect("valid"),
//! ];
//! let index = SimilarityIndex::build(vectors, &IndexOptions::default()).expect("build");
//!
//! let neighbors = index.neighbors(0, 2).expect("in range");
//! assert_eq!(neighbors.len(), 2);
//! assert_eq!(neighbors[0].0, 1); // shares a term with item 0
//! ```

use crate::cancel::CancelToken;
use crate::error::{Result, SugerirError};
use crate::primitives::SparseVector;
use rayon::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

/// Storage strategy knobs for [`SimilarityIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    dense_limit: usize,
    row_cache: usize,
}

impl IndexOptions {
    /// Catalogs up to this size get an eager dense matrix.
    ///
    /// Set to 0 to always compute rows on demand.
    #[must_use]
    pub fn with_dense_limit(mut self, dense_limit: usize) -> Self {
        self.dense_limit = dense_limit;
        self
    }

    /// Capacity of the most-recently-used row cache on the on-demand
    /// path. 0 disables caching.
    #[must_use]
    pub fn with_row_cache(mut self, row_cache: usize) -> Self {
        self.row_cache = row_cache;
        self
    }
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            dense_limit: 512,
            row_cache: 64,
        }
    }
}

/// Exact cosine similarity index over unit-normalized vectors.
#[derive(Debug)]
pub struct SimilarityIndex {
    /// Unit-normalized item vectors in catalog order
    vectors: Vec<SparseVector>,
    /// Row-major N×N matrix when the dense strategy is active
    dense: Option<Vec<f64>>,
    /// MRU row cache for the on-demand strategy
    cache: Option<Mutex<RowCache>>,
    /// Count of all-zero vectors seen at build time
    degenerate: usize,
}

impl SimilarityIndex {
    /// Build an index from item vectors (catalog order).
    ///
    /// # Errors
    ///
    /// Infallible in practice with default options; see
    /// [`SimilarityIndex::build_with`] for the cancellable form.
    pub fn build(vectors: Vec<SparseVector>, options: &IndexOptions) -> Result<Self> {
        Self::build_with(vectors, options, &CancelToken::new())
    }

    /// Build an index, checking `cancel` while materializing the dense
    /// matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::Cancelled`] if the token trips mid-build.
    pub fn build_with(
        vectors: Vec<SparseVector>,
        options: &IndexOptions,
        cancel: &CancelToken,
    ) -> Result<Self> {
        let vectors: Vec<SparseVector> = vectors.iter().map(SparseVector::normalized).collect();
        let degenerate = vectors.iter().filter(|v| v.is_zero()).count();
        let n = vectors.len();

        let dense = if n <= options.dense_limit {
            let rows: Vec<Vec<f64>> = (0..n)
                .into_par_iter()
                .map(|i| {
                    if cancel.is_cancelled() {
                        return Err(SugerirError::Cancelled);
                    }
                    Ok(similarity_row(&vectors, i))
                })
                .collect::<Result<Vec<_>>>()?;
            let mut flat = Vec::with_capacity(n * n);
            for row in rows {
                flat.extend(row);
            }
            Some(flat)
        } else {
            if cancel.is_cancelled() {
                return Err(SugerirError::Cancelled);
            }
            None
        };

        let cache = if dense.is_none() && options.row_cache > 0 {
            Some(Mutex::new(RowCache::new(options.row_cache)))
        } else {
            None
        };

        Ok(Self {
            vectors,
            dense,
            cache,
            degenerate,
        })
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the index holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Count of all-zero vectors seen at build time. Such items have no
    /// similarity direction, score 0 against every pair, and can never
    /// be recommended.
    #[must_use]
    pub fn degenerate_count(&self) -> usize {
        self.degenerate
    }

    /// Cosine similarity between two items.
    ///
    /// 1.0 on the diagonal for non-zero vectors; 0.0 whenever either
    /// vector is all-zero.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::InvalidRequest`] when an index is out of
    /// range.
    pub fn similarity(&self, i: usize, j: usize) -> Result<f64> {
        let n = self.vectors.len();
        if i >= n || j >= n {
            return Err(SugerirError::invalid_request(format!(
                "item index out of range: ({i}, {j}) with {n} items"
            )));
        }
        if let Some(dense) = &self.dense {
            return Ok(dense[i * n + j]);
        }
        Ok(pair_similarity(&self.vectors, i, j))
    }

    /// Top-`n` most similar items to item `i`, excluding `i` itself.
    ///
    /// Sorted by score descending; ties broken by ascending catalog
    /// index. `n` is clamped to the number of other items, so asking
    /// for more neighbors than exist returns all of them.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::InvalidRequest`] when `i` is out of range.
    pub fn neighbors(&self, i: usize, n: usize) -> Result<Vec<(usize, f64)>> {
        let len = self.vectors.len();
        if i >= len {
            return Err(SugerirError::invalid_request(format!(
                "item index {i} out of range: {len} items"
            )));
        }

        let mut scored: Vec<(usize, f64)> = match &self.dense {
            Some(dense) => (0..len)
                .filter(|&j| j != i)
                .map(|j| (j, dense[i * len + j]))
                .collect(),
            None => {
                let row = self.on_demand_row(i);
                (0..len).filter(|&j| j != i).map(|j| (j, row[j])).collect()
            }
        };

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(n);
        Ok(scored)
    }

    /// Fetch or compute the similarity row for item `i` (on-demand path).
    fn on_demand_row(&self, i: usize) -> Arc<Vec<f64>> {
        if let Some(cache) = &self.cache {
            let mut guard = cache.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(row) = guard.get(i) {
                return row;
            }
            drop(guard);

            // Computed off-lock so concurrent queries for other rows
            // are not serialized behind this one.
            let row = Arc::new(similarity_row(&self.vectors, i));
            let mut guard = cache.lock().unwrap_or_else(PoisonError::into_inner);
            guard.insert(i, Arc::clone(&row));
            return row;
        }
        Arc::new(similarity_row(&self.vectors, i))
    }
}

/// Full similarity row for item `i`, diagonal included.
fn similarity_row(vectors: &[SparseVector], i: usize) -> Vec<f64> {
    (0..vectors.len())
        .map(|j| pair_similarity(vectors, i, j))
        .collect()
}

fn pair_similarity(vectors: &[SparseVector], i: usize, j: usize) -> f64 {
    if vectors[i].is_zero() || vectors[j].is_zero() {
        return 0.0;
    }
    if i == j {
        // Exact unit diagonal, immune to normalization rounding.
        return 1.0;
    }
    // Vectors share a dimension by construction; a mismatch cannot
    // happen within one build.
    vectors[i].dot(&vectors[j]).unwrap_or(0.0)
}

/// Bounded most-recently-used cache of similarity rows.
#[derive(Debug)]
struct RowCache {
    capacity: usize,
    rows: HashMap<usize, Arc<Vec<f64>>>,
    order: VecDeque<usize>,
}

impl RowCache {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            rows: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    fn get(&mut self, i: usize) -> Option<Arc<Vec<f64>>> {
        let row = self.rows.get(&i).cloned()?;
        self.touch(i);
        Some(row)
    }

    fn insert(&mut self, i: usize, row: Arc<Vec<f64>>) {
        if self.rows.insert(i, row).is_none() {
            self.order.push_back(i);
        } else {
            self.touch(i);
        }
        while self.rows.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.rows.remove(&oldest);
            }
        }
    }

    fn touch(&mut self, i: usize) {
        self.order.retain(|&k| k != i);
        self.order.push_back(i);
    }
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
