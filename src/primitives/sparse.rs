//! Sparse vector type for TF-IDF feature vectors.

use crate::error::{Result, SugerirError};
use serde::{Deserialize, Serialize};

/// A sparse f64 vector stored as sorted (index, value) pairs.
///
/// Invariants: `indices` is strictly increasing, every index is below
/// `dim`, and no stored value is exactly zero.
///
/// # Examples
///
/// ```
/// use sugerir::primitives::SparseVector;
///
/// let v = SparseVector::from_pairs(5, vec![(3, 2.0), (0, 1.0)]).expect("indices in range");
/// assert_eq!(v.dim(), 5);
/// assert_eq!(v.nnz(), 2);
/// assert_eq!(v.get(3), 2.0);
/// assert_eq!(v.get(1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    dim: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Create an all-zero vector of the given dimension.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create a vector from (index, value) pairs.
    ///
    /// Pairs may arrive in any order; duplicate indices are summed and
    /// exact zeros are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::InvalidRequest`] if any index is out of
    /// range for `dim`.
    pub fn from_pairs(dim: usize, mut pairs: Vec<(usize, f64)>) -> Result<Self> {
        for &(idx, _) in &pairs {
            if idx >= dim {
                return Err(SugerirError::invalid_request(format!(
                    "sparse index {idx} out of range for dimension {dim}"
                )));
            }
        }
        pairs.sort_by_key(|&(idx, _)| idx);

        let mut indices = Vec::with_capacity(pairs.len());
        let mut values = Vec::with_capacity(pairs.len());
        for (idx, value) in pairs {
            if Some(&idx) == indices.last() {
                let last = values.len() - 1;
                values[last] += value;
            } else {
                indices.push(idx);
                values.push(value);
            }
        }

        // Drop entries that summed to exactly zero.
        let mut filtered_indices = Vec::with_capacity(indices.len());
        let mut filtered_values = Vec::with_capacity(values.len());
        for (idx, value) in indices.into_iter().zip(values) {
            if value != 0.0 {
                filtered_indices.push(idx);
                filtered_values.push(value);
            }
        }

        Ok(Self {
            dim,
            indices: filtered_indices,
            values: filtered_values,
        })
    }

    /// The logical dimension of the vector.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of non-zero entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Whether the vector has no non-zero entries.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Value at the given index (0.0 when not stored).
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Iterate over stored (index, value) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product with another vector of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns [`SugerirError::InvalidRequest`] on dimension mismatch.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        if self.dim != other.dim {
            return Err(SugerirError::invalid_request(format!(
                "dimension mismatch: {} vs {}",
                self.dim, other.dim
            )));
        }

        // Two-pointer merge over sorted indices.
        let mut sum = 0.0;
        let (mut a, mut b) = (0, 0);
        while a < self.indices.len() && b < other.indices.len() {
            match self.indices[a].cmp(&other.indices[b]) {
                std::cmp::Ordering::Less => a += 1,
                std::cmp::Ordering::Greater => b += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[a] * other.values[b];
                    a += 1;
                    b += 1;
                }
            }
        }
        Ok(sum)
    }

    /// Euclidean (L2) norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Return a unit-norm copy of this vector.
    ///
    /// An all-zero vector has no direction and is returned unchanged.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return self.clone();
        }
        Self {
            dim: self.dim,
            indices: self.indices.clone(),
            values: self.values.iter().map(|v| v / norm).collect(),
        }
    }
}

#[cfg(test)]
#[path = "sparse_tests.rs"]
mod tests;
