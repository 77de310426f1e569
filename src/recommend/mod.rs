//! Content-based recommendation engine.
//!
//! Orchestrates the build/query lifecycle: a loaded catalog is
//! vectorized with TF-IDF, indexed for cosine similarity, and served
//! through title queries with an approximate-match fallback.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::recommend::{Item, RecommendationEngine};
//!
//! let engine = RecommendationEngine::new();
//! engine.load(vec![
//!     Item::new(1, "Alpha (2000)", "Action|Comedy", 7.2),
//!     Item::new(2, "Beta (2001)", "Action|Drama", 6.8),
//!     Item::new(3, "Gamma (2002)", "Documentary", 8.1),
//! ]);
//! engine.preprocess().expect("build should succeed");
//!
//! let response = engine.query("Alpha (2000)", 2).expect("query should succeed");
//! assert_eq!(response.recommendations[0].title, "Beta (2001)");
//! ```

pub mod catalog;
pub mod engine;
pub mod resolve;

pub use catalog::Item;
pub use engine::{BuildReport, EngineState, QueryResponse, Recommendation, RecommendationEngine};
pub use resolve::{MatchKind, Resolution, TitleResolver};
