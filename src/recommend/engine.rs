//! Build/query lifecycle with atomic generation swap.
//!
//! The engine moves through three states:
//!
//! ```text
//! Empty --load()--> Loaded --preprocess()--> Ready
//!   ^                 ^  |                     |
//!   |                 |  +--load() (replace)   |
//!   +-----------------+-------load()-----------+
//! ```
//!
//! Each successful `preprocess()` produces one immutable
//! generation (vocabulary + vectors + similarity index + title index).
//! Queries clone an `Arc` to the published generation and compute
//! lock-free, so unlimited concurrent readers are safe; rebuilds
//! construct the next generation entirely off-lock and publish it with
//! a single swap. In-flight queries keep the generation they started
//! with and never observe a half-built index.

use crate::cancel::CancelToken;
use crate::error::{Result, SugerirError};
use crate::index::{IndexOptions, SimilarityIndex};
use crate::recommend::catalog::Item;
use crate::recommend::resolve::{MatchKind, TitleResolver};
use crate::text::vectorize::{TfidfVectorizer, Vocabulary};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Non-fatal build statistics returned by a successful `preprocess()`.
///
/// `degenerate_vectors` counts items whose feature text produced an
/// all-zero vector; they score 0 against everything and can never be
/// recommended, but they do not fail the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Items in the built generation
    pub n_items: usize,
    /// Distinct terms in the generation's vocabulary
    pub vocabulary_size: usize,
    /// Items with an all-zero feature vector
    pub degenerate_vectors: usize,
    /// Wall-clock build duration
    pub build_time: Duration,
}

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Title of the recommended item
    pub title: String,
    /// Its feature text
    pub feature_text: String,
    /// Cosine similarity to the query item, in `[0, 1]`
    pub similarity: f64,
}

/// Result of a successful query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The catalog title that was actually matched
    pub matched_title: String,
    /// Exact or approximate; callers should tell the user when an
    /// approximate substitution happened
    pub match_kind: MatchKind,
    /// Ranked neighbors, score descending
    pub recommendations: Vec<Recommendation>,
}

/// Observable lifecycle state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No catalog loaded.
    Empty,
    /// Catalog loaded, model not yet built.
    Loaded,
    /// Model built; queries are valid.
    Ready,
}

/// One immutable build artifact: everything a query needs.
struct Generation {
    items: Arc<Vec<Item>>,
    vocabulary: Vocabulary,
    index: SimilarityIndex,
    resolver: TitleResolver,
    report: BuildReport,
}

impl Generation {
    fn query(&self, title: &str, n: usize) -> Result<QueryResponse> {
        let resolution = self.resolver.resolve(title)?;
        let neighbors = self.index.neighbors(resolution.index, n)?;
        let recommendations = neighbors
            .into_iter()
            .map(|(j, similarity)| {
                let item = &self.items[j];
                Recommendation {
                    title: item.title.clone(),
                    feature_text: item.feature_text.clone(),
                    similarity,
                }
            })
            .collect();
        Ok(QueryResponse {
            matched_title: resolution.matched_title,
            match_kind: resolution.kind,
            recommendations,
        })
    }
}

enum State {
    Empty,
    Loaded { catalog: Arc<Vec<Item>> },
    Ready { generation: Arc<Generation> },
}

/// Content-based recommendation engine.
///
/// All methods take `&self`; the engine is safe to share across threads
/// behind an `Arc`.
///
/// `n` handling is by clamping, not erroring: `query(title, 0)` is a
/// valid degenerate request returning zero recommendations, and an
/// oversized `n` returns every other item.
///
/// # Examples
///
/// ```
/// use sugerir::recommend::{Item, RecommendationEngine};
///
/// let engine = RecommendationEngine::new();
/// engine.load(vec![
///     Item::new(1, "Alpha (2000)", "Action|Comedy", 7.2),
///     Item::new(2, "Beta (2001)", "Action|Drama", 6.8),
/// ]);
/// let report = engine.preprocess().expect("build should succeed");
/// assert_eq!(report.n_items, 2);
///
/// let response = engine.query("Alpha (2000)", 1).expect("query should succeed");
/// assert_eq!(response.recommendations.len(), 1);
/// ```
#[allow(missing_debug_implementations)]
pub struct RecommendationEngine {
    vectorizer: TfidfVectorizer,
    index_options: IndexOptions,
    state: RwLock<State>,
    /// Serializes load() and preprocess() against each other
    build_lock: Mutex<()>,
}

impl RecommendationEngine {
    /// Create an engine with default vectorizer (pipe delimiter,
    /// lowercasing) and index options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(),
            index_options: IndexOptions::default(),
            state: RwLock::new(State::Empty),
            build_lock: Mutex::new(()),
        }
    }

    /// Replace the vectorizer configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::recommend::RecommendationEngine;
    /// use sugerir::text::tokenize::WhitespaceTokenizer;
    /// use sugerir::text::vectorize::TfidfVectorizer;
    ///
    /// let engine = RecommendationEngine::new().with_vectorizer(
    ///     TfidfVectorizer::new()
    ///         .with_tokenizer(Box::new(WhitespaceTokenizer::new()))
    ///         .with_stop_words_english(),
    /// );
    /// ```
    #[must_use]
    pub fn with_vectorizer(mut self, vectorizer: TfidfVectorizer) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// Replace the similarity index options.
    #[must_use]
    pub fn with_index_options(mut self, options: IndexOptions) -> Self {
        self.index_options = options;
        self
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        match &*self.read_state() {
            State::Empty => EngineState::Empty,
            State::Loaded { .. } => EngineState::Loaded,
            State::Ready { .. } => EngineState::Ready,
        }
    }

    /// Load a catalog, entering `Loaded` and discarding any prior
    /// generation. Valid in every state.
    pub fn load(&self, catalog: Vec<Item>) {
        let _build = self.lock_build();
        let mut state = self.write_state();
        *state = State::Loaded {
            catalog: Arc::new(catalog),
        };
    }

    /// Build the model for the loaded catalog, entering `Ready`.
    ///
    /// # Errors
    ///
    /// [`SugerirError::EmptyCatalog`] when nothing is loaded, or
    /// [`SugerirError::InvalidRequest`] when already `Ready` (rebuilds
    /// require an explicit `load()`).
    pub fn preprocess(&self) -> Result<BuildReport> {
        self.preprocess_with(&CancelToken::new())
    }

    /// Cancellable form of [`RecommendationEngine::preprocess`].
    ///
    /// A cancelled build makes no state transition: the engine stays
    /// `Loaded`, and in-flight queries keep whatever generation they
    /// already hold; nothing half-built is ever published.
    ///
    /// # Errors
    ///
    /// As [`RecommendationEngine::preprocess`], plus
    /// [`SugerirError::Cancelled`].
    pub fn preprocess_with(&self, cancel: &CancelToken) -> Result<BuildReport> {
        let _build = self.lock_build();

        let catalog = {
            let state = self.read_state();
            match &*state {
                State::Empty => return Err(SugerirError::EmptyCatalog),
                State::Ready { .. } => {
                    return Err(SugerirError::invalid_request(
                        "preprocess() already complete; call load() to rebuild",
                    ))
                }
                State::Loaded { catalog } => Arc::clone(catalog),
            }
        };

        let generation = build_generation(&self.vectorizer, &self.index_options, catalog, cancel)?;
        let report = generation.report.clone();

        let mut state = self.write_state();
        *state = State::Ready {
            generation: Arc::new(generation),
        };
        Ok(report)
    }

    /// Resolve `title` and return its top-`n` neighbors with scores.
    ///
    /// # Errors
    ///
    /// [`SugerirError::NotReady`] before a successful `preprocess()`,
    /// or [`SugerirError::ItemNotFound`] when resolution fails.
    pub fn query(&self, title: &str, n: usize) -> Result<QueryResponse> {
        let generation = {
            let state = self.read_state();
            match &*state {
                State::Ready { generation, .. } => Arc::clone(generation),
                _ => return Err(SugerirError::NotReady),
            }
        };
        generation.query(title, n)
    }

    /// Build report of the published generation, if any.
    #[must_use]
    pub fn build_report(&self) -> Option<BuildReport> {
        match &*self.read_state() {
            State::Ready { generation, .. } => Some(generation.report.clone()),
            _ => None,
        }
    }

    /// Vocabulary size of the published generation, if any.
    #[must_use]
    pub fn vocabulary_size(&self) -> Option<usize> {
        match &*self.read_state() {
            State::Ready { generation, .. } => Some(generation.vocabulary.len()),
            _ => None,
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_build(&self) -> std::sync::MutexGuard<'_, ()> {
        self.build_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Construct one generation off-lock.
fn build_generation(
    vectorizer: &TfidfVectorizer,
    options: &IndexOptions,
    items: Arc<Vec<Item>>,
    cancel: &CancelToken,
) -> Result<Generation> {
    let started = Instant::now();
    if cancel.is_cancelled() {
        return Err(SugerirError::Cancelled);
    }

    // A loaded-but-empty catalog is not a build error: the engine goes
    // Ready with an empty neighbor set and every query resolves to
    // ItemNotFound.
    if items.is_empty() {
        let index = SimilarityIndex::build_with(Vec::new(), options, cancel)?;
        let report = BuildReport {
            n_items: 0,
            vocabulary_size: 0,
            degenerate_vectors: 0,
            build_time: started.elapsed(),
        };
        return Ok(Generation {
            items,
            vocabulary: Vocabulary::default(),
            index,
            resolver: TitleResolver::new(Vec::<String>::new()),
            report,
        });
    }

    let documents: Vec<&str> = items.iter().map(|it| it.feature_text.as_str()).collect();
    let model = vectorizer.fit(&documents)?;
    if cancel.is_cancelled() {
        return Err(SugerirError::Cancelled);
    }

    let vocabulary = model.vocabulary().clone();
    let index = SimilarityIndex::build_with(model.into_vectors(), options, cancel)?;
    let resolver = TitleResolver::new(items.iter().map(|it| it.title.clone()));

    let report = BuildReport {
        n_items: items.len(),
        vocabulary_size: vocabulary.len(),
        degenerate_vectors: index.degenerate_count(),
        build_time: started.elapsed(),
    };

    Ok(Generation {
        items,
        vocabulary,
        index,
        resolver,
        report,
    })
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
