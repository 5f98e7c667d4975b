//! Path decomposers
//!
//! Purely textual path helpers. Nothing here touches the file system,
//! resolves `.`/`..`, or checks that a path exists.
//!
//! The directory separator is never read from a global: every function that
//! depends on it takes a [`Separator`]. Callers pick one once, typically
//! [`Separator::NATIVE`], and pass it down.

use crate::{String, ToOwned, accessors::find_backward};

/// Directory separator used to decompose a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `/`, used on Unix-like systems.
    Slash,
    /// `\`, used on Windows.
    Backslash,
}

impl Separator {
    /// Separator of the target this crate is compiled for.
    #[cfg(windows)]
    pub const NATIVE: Separator = Separator::Backslash;

    /// Separator of the target this crate is compiled for.
    #[cfg(not(windows))]
    pub const NATIVE: Separator = Separator::Slash;

    /// The separator character.
    pub const fn as_char(self) -> char {
        match self {
            Separator::Slash => '/',
            Separator::Backslash => '\\',
        }
    }

    /// The separator as a one-character string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Separator::Slash => "/",
            Separator::Backslash => "\\",
        }
    }

    /// The opposite separator.
    pub const fn other(self) -> Separator {
        match self {
            Separator::Slash => Separator::Backslash,
            Separator::Backslash => Separator::Slash,
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::NATIVE
    }
}

impl core::fmt::Display for Separator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn last_separator(path: &str, sep: Separator) -> Option<usize> {
    find_backward(path, sep.as_str(), None)
}

/// Final component of `path`: everything after the last separator.
///
/// Returns the whole path when it contains no separator.
///
/// # Examples
/// - `basename("/usr/local/bin", Separator::Slash)` → `"bin"`
/// - `basename("noslash", Separator::Slash)` → `"noslash"`
/// - `basename("/usr/", Separator::Slash)` → `""`
pub fn basename(path: &str, sep: Separator) -> String {
    match last_separator(path, sep) {
        Some(pos) => path[pos + 1..].to_owned(),
        None => path.to_owned(),
    }
}

/// Everything before the last separator of `path`.
///
/// Returns an empty string when `path` contains no separator.
///
/// # Examples
/// - `dirname("/usr/local/bin", Separator::Slash)` → `"/usr/local"`
/// - `dirname("/bin", Separator::Slash)` → `""`
/// - `dirname("noslash", Separator::Slash)` → `""`
pub fn dirname(path: &str, sep: Separator) -> String {
    match last_separator(path, sep) {
        Some(pos) => path[..pos].to_owned(),
        None => String::new(),
    }
}

/// Everything after the last `.` anywhere in `path`.
///
/// The search is not limited to the final component, so a dot in a
/// directory name counts when the file name has none:
/// `extension("v1.2/README")` is `"2/README"`.
///
/// # Examples
/// - `extension("archive.tar.gz")` → `"gz"`
/// - `extension("Makefile")` → `""`
pub fn extension(path: &str) -> String {
    match find_backward(path, ".", None) {
        Some(pos) => path[pos + 1..].to_owned(),
        None => String::new(),
    }
}

/// File name of `path` without its extension (the stem).
///
/// Only the last `.` suffix of the final component is removed.
///
/// # Examples
/// - `filename("archive.tar.gz", Separator::Slash)` → `"archive.tar"`
/// - `filename("/etc/hosts", Separator::Slash)` → `"hosts"`
/// - `filename("/home/user/.bashrc", Separator::Slash)` → `""`
pub fn filename(path: &str, sep: Separator) -> String {
    let mut base = basename(path, sep);
    if let Some(pos) = find_backward(&base, ".", None) {
        base.truncate(pos);
    }
    base
}

/// Rewrite every separator in `path` to `target`.
///
/// This is a textual substitution of `target.other()` by `target`; the
/// path is not resolved against anything.
///
/// # Examples
/// - `normalize_separators("C:/Users/me", Separator::Backslash)` → `"C:\\Users\\me"`
/// - `normalize_separators("a\\b/c", Separator::Slash)` → `"a/b/c"`
pub fn normalize_separators(path: &str, target: Separator) -> String {
    tracing::trace!(%target, "normalizing path separators");
    path.replace(target.other().as_char(), target.as_str())
}

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;
