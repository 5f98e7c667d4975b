//! Error types for the string primitives.
//!
//! Most operations are total and never fail: searches report a missing match
//! as `None` and out-of-range offsets are clipped. The strict variants
//! (`try_substring`, `locate`) surface those conditions as [`Error`] values
//! instead, for callers that prefer to propagate them with `?`.

use crate::String;
use thiserror::Error;

/// Errors reported by the strict string operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A search found no occurrence of `needle`.
    #[error("no occurrence of {needle:?} found")]
    NotFound { needle: String },

    /// An offset lies past the end of the subject string.
    #[error("offset {offset} is out of range for a string of length {length}")]
    OutOfRange { offset: usize, length: usize },

    /// An argument is malformed for the requested operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Shorthand for [`Error::NotFound`].
    pub fn not_found(needle: impl Into<String>) -> Self {
        Error::NotFound {
            needle: needle.into(),
        }
    }

    /// Whether this error only reports a missing match.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result alias used by the strict operations.
pub type Result<T> = core::result::Result<T, Error>;
