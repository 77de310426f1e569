//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sugerir::prelude::*;
//! ```

pub use crate::cancel::CancelToken;
pub use crate::error::{Result, SugerirError};
pub use crate::index::{IndexOptions, SimilarityIndex};
pub use crate::primitives::SparseVector;
pub use crate::recommend::{
    BuildReport, EngineState, Item, MatchKind, QueryResponse, Recommendation,
    RecommendationEngine, Resolution, TitleResolver,
};
pub use crate::text::tokenize::{DelimiterTokenizer, WhitespaceTokenizer};
pub use crate::text::vectorize::{TfidfModel, TfidfVectorizer, Vocabulary};
pub use crate::text::Tokenizer;
