//! Sugerir: content-based item similarity engine in pure Rust.
//!
//! Sugerir builds a TF-IDF vector-space model over item feature text,
//! computes pairwise cosine similarity, and answers top-N
//! nearest-neighbor queries by title, with a cheap positional-overlap
//! fallback when an exact title lookup fails.
//!
//! It is a purely in-memory computational service: catalog ingestion,
//! rendering, and persistence belong to external collaborators.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::prelude::*;
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
//! assert!(response.recommendations[0].similarity > 0.0);
//! ```
//!
//! # Lifecycle and concurrency
//!
//! The engine moves `Empty → Loaded → Ready`. Each `preprocess()`
//! produces one immutable generation (vocabulary + vectors + similarity
//! index); queries run lock-free against the generation they started
//! with, and rebuilds publish a new generation with a single atomic
//! swap. Builds are parallel (rayon) and cancellable.
//!
//! # Modules
//!
//! - [`primitives`]: sparse vector type
//! - [`text`]: tokenization, stop words, TF-IDF vectorization
//! - [`index`]: exact cosine similarity index
//! - [`recommend`]: title resolution and the recommendation engine
//! - [`synthetic`]: seedable catalog fixtures
//! - [`cancel`]: cooperative build cancellation
//! - [`error`]: error kinds and the crate [`Result`] alias
//!
//! # Known limitation
//!
//! The approximate title match uses a positional character-overlap
//! ratio, kept as a compatibility contract. It is weaker than proper
//! string-distance measures: transposed or shifted characters score
//! near zero.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cancel;
pub mod error;
pub mod index;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod synthetic;
pub mod text;

pub use error::{Result, SugerirError};
