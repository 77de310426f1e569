//! Cooperative cancellation for long-running builds.
//!
//! A [`CancelToken`] is a cheap, cloneable flag shared between an
//! interactive caller and an in-flight `preprocess()`. Cancelling a
//! build never disturbs the previously published generation; the engine
//! remains queryable with its old state.
//!
//! # Examples
//!
//! ```
//! use sugerir::cancel::CancelToken;
//!
//! let token = CancelToken::new();
//! assert!(!token.is_cancelled());
//!
//! token.cancel();
//! assert!(token.is_cancelled());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag checked cooperatively during builds.
///
/// Clones observe the same flag. Callers wanting a timeout arm a timer
/// thread that trips the token after the deadline.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
