//! Core compute primitives.
//!
//! The engine represents every feature vector sparsely: catalogs with
//! thousands of distinct terms produce vectors with a handful of
//! non-zero entries each.

mod sparse;

pub use sparse::SparseVector;
