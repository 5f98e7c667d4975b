//! Transformers
//!
//! Trimming, reversal, ASCII case mapping, partitioning at a needle and
//! literal replacement. Every function returns a new owned string.
//!
//! Design notes:
//! - Whitespace is exactly space, tab, carriage return and newline
//! - Upper/Lower are ASCII-only; other bytes pass through unchanged
//! - Reverse works per character so the result is always valid UTF-8

use crate::{String, ToOwned, accessors::find_forward};

/// Characters stripped by the trim family.
const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

// ========================================================================
// Trimming
// ========================================================================

/// Remove leading and trailing whitespace.
///
/// A string made only of whitespace trims to the empty string.
pub fn trim(s: &str) -> String {
    s.trim_matches(WHITESPACE).to_owned()
}

/// Remove leading whitespace.
pub fn trim_left(s: &str) -> String {
    s.trim_start_matches(WHITESPACE).to_owned()
}

/// Remove trailing whitespace.
pub fn trim_right(s: &str) -> String {
    s.trim_end_matches(WHITESPACE).to_owned()
}

// ========================================================================
// Reversal and Case Mapping
// ========================================================================

/// Reverse `s`.
///
/// ASCII input is reversed byte by byte. Multi-byte characters are moved as
/// a unit, so `reverse("añb")` is `"bña"`.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Convert to uppercase (ASCII-only)
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Convert to lowercase (ASCII-only)
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

// ========================================================================
// Partitioning
// ========================================================================

/// Which part of the subject [`partition`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Everything strictly before the first match.
    Before,
    /// The first match and everything after it.
    After,
}

/// Split `s` at the first occurrence of `needle` and keep one side.
///
/// Returns an empty string when `needle` does not occur in `s`.
/// [`Side::After`] keeps the whole match, not the text one past its first
/// character as some scripting-library ports do.
///
/// # Examples
/// - `partition("user@example.com", "@", Side::Before)` → `"user"`
/// - `partition("user@example.com", "@", Side::After)` → `"@example.com"`
/// - `partition("user", "@", Side::After)` → `""`
pub fn partition(s: &str, needle: &str, side: Side) -> String {
    let Some(pos) = find_forward(s, needle, 0) else {
        return String::new();
    };

    match side {
        Side::Before => s[..pos].to_owned(),
        Side::After => s[pos..].to_owned(),
    }
}

/// [`partition`] with the side given as a flag: `true` keeps what comes
/// before the match.
pub fn partition_flag(s: &str, needle: &str, before: bool) -> String {
    let side = if before { Side::Before } else { Side::After };
    partition(s, needle, side)
}

// ========================================================================
// Replacement
// ========================================================================

/// Replace every non-overlapping occurrence of `pattern` with `replacement`.
///
/// The scan resumes right after each inserted replacement, so inserted text
/// is never matched again. An empty pattern leaves `s` unchanged.
///
/// # Examples
/// - `replace_all("aaa", "a", "bb")` → `"bbbbbb"`
/// - `replace_all("abc", "", "X")` → `"abc"`
pub fn replace_all(s: &str, pattern: &str, replacement: &str) -> String {
    if pattern.is_empty() {
        tracing::debug!("replace with an empty pattern, returning input unchanged");
        return s.to_owned();
    }
    s.replace(pattern, replacement)
}

/// Replace the first `count` occurrences of `pattern` with `replacement`.
///
/// Same scanning rules as [`replace_all`]. An empty pattern or a zero count
/// leaves `s` unchanged.
pub fn replace_n(s: &str, pattern: &str, replacement: &str, count: usize) -> String {
    if pattern.is_empty() {
        tracing::debug!("replace with an empty pattern, returning input unchanged");
        return s.to_owned();
    }
    s.replacen(pattern, replacement, count)
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
