//! Error types for sugerir operations.
//!
//! Provides explicit error kinds for every failure the engine can
//! return to a caller. Query-time failures are always surfaced through
//! [`Result`]; nothing panics past the query boundary.

use std::fmt;

/// Main error type for sugerir operations.
///
/// # Examples
///
/// ```
/// use sugerir::error::SugerirError;
///
/// let err = SugerirError::NotReady;
/// assert!(err.to_string().contains("preprocess"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SugerirError {
    /// Query attempted before a successful `preprocess()`.
    NotReady,

    /// `preprocess()` invoked with no catalog loaded.
    EmptyCatalog,

    /// Exact and approximate title resolution both failed.
    ItemNotFound {
        /// The title the caller asked for
        query: String,
        /// Best sub-threshold candidate and its overlap ratio, for
        /// diagnostics only; it is never silently substituted.
        closest: Option<(String, f64)>,
    },

    /// Request outside the engine's lifecycle state machine, or an
    /// out-of-range index handed to a lower layer.
    InvalidRequest {
        /// What was wrong with the request
        message: String,
    },

    /// Build interrupted through a [`CancelToken`](crate::cancel::CancelToken).
    Cancelled,

    /// Empty input where at least one element is required.
    EmptyInput {
        /// What was empty
        what: String,
    },
}

impl SugerirError {
    /// Convenience constructor for [`SugerirError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        SugerirError::InvalidRequest {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`SugerirError::EmptyInput`].
    pub fn empty_input(what: impl Into<String>) -> Self {
        SugerirError::EmptyInput { what: what.into() }
    }
}

impl fmt::Display for SugerirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SugerirError::NotReady => {
                write!(f, "model not ready: call preprocess() before query()")
            }
            SugerirError::EmptyCatalog => {
                write!(f, "no catalog loaded: call load() before preprocess()")
            }
            SugerirError::ItemNotFound { query, closest } => match closest {
                Some((title, ratio)) => write!(
                    f,
                    "item '{query}' not found; closest candidate '{title}' (overlap {ratio:.3}) is below threshold"
                ),
                None => write!(f, "item '{query}' not found and no close matches"),
            },
            SugerirError::InvalidRequest { message } => {
                write!(f, "invalid request: {message}")
            }
            SugerirError::Cancelled => write!(f, "build cancelled"),
            SugerirError::EmptyInput { what } => {
                write!(f, "empty input: {what} must contain at least one element")
            }
        }
    }
}

impl std::error::Error for SugerirError {}

impl From<&str> for SugerirError {
    fn from(msg: &str) -> Self {
        SugerirError::InvalidRequest {
            message: msg.to_string(),
        }
    }
}

/// Convenience result type using [`SugerirError`].
pub type Result<T> = std::result::Result<T, SugerirError>;
