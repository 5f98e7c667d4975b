//! Collection helpers
//!
//! Split on a delimiter, join with glue and linear membership tests.

use crate::{String, ToOwned, Vec, accessors::find_forward};

/// Split `s` on every occurrence of `delimiter`.
///
/// The segment after the last delimiter is always included, even when it is
/// empty, so a string with `n` delimiters yields `n + 1` segments. A leading
/// delimiter produces a leading empty segment.
///
/// An empty delimiter has no split points: the result is `[s]`.
///
/// # Examples
/// - `split("a,b,,c", ",")` → `["a", "b", "", "c"]`
/// - `split(",a", ",")` → `["", "a"]`
/// - `split("nodelimiter", ",")` → `["nodelimiter"]`
pub fn split(s: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        tracing::debug!("split with an empty delimiter, returning input as one segment");
        return crate::vec![s.to_owned()];
    }

    let mut parts = Vec::new();
    let mut start = 0;
    while let Some(pos) = find_forward(s, delimiter, start) {
        parts.push(s[start..pos].to_owned());
        start = pos + delimiter.len();
    }
    parts.push(s[start..].to_owned());
    parts
}

/// Concatenate `segments` with `glue` between consecutive items.
///
/// An empty sequence joins to the empty string.
///
/// # Examples
/// - `join(&["a", "b", "c"], ", ")` → `"a, b, c"`
/// - `join(&["solo"], ",")` → `"solo"`
/// - `join::<&str>(&[], ",")` → `""`
pub fn join<S: AsRef<str>>(segments: &[S], glue: &str) -> String {
    let mut iter = segments.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut joined = String::from(first.as_ref());
    for segment in iter {
        joined.push_str(glue);
        joined.push_str(segment.as_ref());
    }
    joined
}

/// Whether any element of `collection` equals `needle`.
///
/// Every element is checked, including the last; an empty collection
/// contains nothing.
pub fn contains<S: AsRef<str>>(collection: &[S], needle: &str) -> bool {
    collection.iter().any(|item| item.as_ref() == needle)
}

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;
