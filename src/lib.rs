//! phpstring - string and path helpers in the style of scripting languages
//!
//! # Overview
//!
//! phpstring collects the small text primitives that scripting languages ship
//! out of the box and that are tedious to get exactly right by hand:
//!
//! - Trimming, reversing and ASCII case folding
//! - Byte-offset substring search and extraction
//! - Splitting on a delimiter and joining with glue
//! - Decomposing paths into directory, base name, stem and extension
//! - printf-style formatting into a growable buffer
//!
//! Every function takes borrowed input and returns a new owned value. There
//! is no global state; the only environment-dependent choice, the path
//! separator, is an explicit [`Separator`] argument.
//!
//! # Quick Start
//!
//! ```
//! use phpstring::{Separator, Side, basename, partition, split, join, trim};
//!
//! let fields = split("  alice, bob ,carol ", ",");
//! let names: Vec<String> = fields.iter().map(|f| trim(f)).collect();
//! assert_eq!(join(&names, ";"), "alice;bob;carol");
//!
//! assert_eq!(partition("user@example.com", "@", Side::Before), "user");
//! assert_eq!(basename("/var/log/syslog", Separator::Slash), "syslog");
//! ```
//!
//! # Formatting
//!
//! ```
//! use phpstring::{Arg, sprintf};
//!
//! let line = sprintf("%-5s|%03d", &[Arg::from("id"), Arg::Int(7)]).unwrap();
//! assert_eq!(line, "id   |007");
//!
//! // Errors keep the format string so they can be rendered with context
//! let err = sprintf("%d items", &[]).unwrap_err();
//! assert_eq!(err.to_string(), "missing argument 1 for this directive");
//! ```

use thiserror::Error;

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export the string primitives
pub use phpstring_core::{
    Separator, Side, basename, compare, compare_bounded, contains, dirname, extension, filename,
    find_backward, find_forward, join, length, locate, normalize_separators, partition,
    partition_flag, replace_all, replace_n, reverse, split, substring, to_lower, to_upper, trim,
    trim_left, trim_right, try_substring,
};

// Re-export the formatter crate; its `sprintf!` macro lives at `phpstring::fmt::sprintf!`.
pub use phpstring_fmt as fmt;
pub use phpstring_fmt::{Arg, FormatError};

/// Umbrella error for everything the library can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A strict string operation failed.
    #[error(transparent)]
    Text(#[from] phpstring_core::Error),

    /// A format string could not be applied to its arguments.
    #[error("{error}")]
    Format {
        error: FormatError,
        /// The format string, kept for rendering the error in context.
        format: String,
    },
}

impl Error {
    /// Stable error code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Text(phpstring_core::Error::NotFound { .. }) => "S001",
            Error::Text(phpstring_core::Error::OutOfRange { .. }) => "S002",
            Error::Text(phpstring_core::Error::InvalidArgument(_)) => "S003",
            Error::Format { error, .. } => error.code(),
        }
    }
}

/// Format `args` according to `format`, keeping the format string in the
/// error so it can be passed to [`render_error`].
///
/// See [`phpstring_fmt::sprintf`] for the directive syntax.
pub fn sprintf(format: &str, args: &[Arg<'_>]) -> Result<String, Error> {
    phpstring_fmt::sprintf(format, args).map_err(|error| Error::Format {
        error,
        format: format.to_owned(),
    })
}
