//! Nearest-neighbor search over item vectors.
//!
//! The engine's catalogs are small enough for exact search: the
//! [`similarity::SimilarityIndex`] computes exact cosine similarity,
//! eagerly for small catalogs and row-by-row on demand for large ones.

pub mod similarity;

pub use similarity::{IndexOptions, SimilarityIndex};
