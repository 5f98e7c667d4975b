//! Primitive accessors
//!
//! Length, substring extraction, forward/backward search and byte-wise
//! comparison.
//!
//! Design notes:
//! - Offsets and lengths count bytes, not codepoints
//! - Searches return `Option<usize>`; `None` is the only "no match" value
//! - `substring` clips instead of failing; `try_substring` is the strict form
//! - Cut points that fall inside a multi-byte character snap down to the
//!   previous character boundary

use crate::{
    String, ToOwned,
    format,
    error::{Error, Result},
    floor_boundary,
};
use core::cmp::Ordering;

// ========================================================================
// Length and Extraction
// ========================================================================

/// Number of bytes in `s`.
pub fn length(s: &str) -> usize {
    s.len()
}

/// Extract at most `len` bytes of `s` starting at byte `offset`.
///
/// `len = None` extracts to the end of the string.
///
/// # Edge Cases
///
/// - If `offset` is beyond the string length, returns an empty string
/// - If `offset + len` is beyond the string length, the slice is clipped
/// - Offsets inside a multi-byte character snap down to its first byte
///
/// # Examples
/// - `substring("hello", 1, Some(3))` → `"ell"`
/// - `substring("hello", 3, None)` → `"lo"`
/// - `substring("hello", 10, None)` → `""`
pub fn substring(s: &str, offset: usize, len: Option<usize>) -> String {
    if offset > s.len() {
        tracing::trace!(offset, length = s.len(), "substring offset past end, clipping to empty");
        return String::new();
    }

    let start = floor_boundary(s, offset);
    let end = match len {
        Some(len) => floor_boundary(s, start.saturating_add(len)),
        None => s.len(),
    };

    if start >= end {
        return String::new();
    }
    s[start..end].to_owned()
}

/// Like [`substring`], but reports an `offset` past the end of `s` as
/// [`Error::OutOfRange`] and an `offset` inside a multi-byte character as
/// [`Error::InvalidArgument`] instead of adjusting them.
///
/// A `len` that runs past the end is still clipped.
pub fn try_substring(s: &str, offset: usize, len: Option<usize>) -> Result<String> {
    if offset > s.len() {
        return Err(Error::OutOfRange {
            offset,
            length: s.len(),
        });
    }
    if !s.is_char_boundary(offset) {
        return Err(Error::InvalidArgument(format!(
            "offset {offset} is not on a character boundary"
        )));
    }
    Ok(substring(s, offset, len))
}

// ========================================================================
// Searching
// ========================================================================

/// Byte offset of the first occurrence of `needle` in `s` at or after `start`.
///
/// An empty needle matches at `start` itself. Returns `None` when there is
/// no match or `start` lies past the end of `s`.
///
/// # Examples
/// - `find_forward("hello world", "world", 0)` → `Some(6)`
/// - `find_forward("abcabc", "abc", 1)` → `Some(3)`
/// - `find_forward("hello", "xyz", 0)` → `None`
pub fn find_forward(s: &str, needle: &str, start: usize) -> Option<usize> {
    if start > s.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(start);
    }

    let haystack = &s.as_bytes()[start..];
    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_bytes())
        .map(|pos| start + pos)
}

/// Byte offset of the last occurrence of `needle` in `s` that begins at or
/// before `start`.
///
/// `start = None` searches from the end of the string; a `start` past the
/// end is treated the same way. The whole match must lie inside `s`. An
/// empty needle matches at `min(start, s.len())`.
///
/// # Examples
/// - `find_backward("abcabc", "abc", None)` → `Some(3)`
/// - `find_backward("abcabc", "abc", Some(2))` → `Some(0)`
/// - `find_backward("abc", "x", None)` → `None`
pub fn find_backward(s: &str, needle: &str, start: Option<usize>) -> Option<usize> {
    let start = start.map_or(s.len(), |start| start.min(s.len()));
    if needle.is_empty() {
        return Some(start);
    }
    if needle.len() > s.len() {
        return None;
    }

    // Latest position a match can begin at and still fit in `s`.
    let last = start.min(s.len() - needle.len());
    s.as_bytes()[..last + needle.len()]
        .windows(needle.len())
        .rposition(|window| window == needle.as_bytes())
}

/// Byte offset of the first occurrence of `needle` in `s`, or
/// [`Error::NotFound`] when there is none.
pub fn locate(s: &str, needle: &str) -> Result<usize> {
    find_forward(s, needle, 0).ok_or_else(|| Error::not_found(needle))
}

// ========================================================================
// Comparison
// ========================================================================

/// Byte-lexicographic three-way comparison of `a` and `b`.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// Compare the first `len` bytes of `a` against the whole of `b`.
///
/// When `len` exceeds the length of `a`, all of `a` takes part in the
/// comparison.
///
/// # Examples
/// - `compare_bounded("hello", "he", 2)` → `Equal`
/// - `compare_bounded("hello", "help", 3)` → `Less` (`"hel"` vs `"help"`)
/// - `compare_bounded("abc", "abc", 100)` → `Equal`
pub fn compare_bounded(a: &str, b: &str, len: usize) -> Ordering {
    let prefix = &a.as_bytes()[..len.min(a.len())];
    prefix.cmp(b.as_bytes())
}

#[cfg(test)]
#[path = "accessors_test.rs"]
mod accessors_test;
