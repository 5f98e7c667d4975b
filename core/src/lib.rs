#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Scripting-style string and path primitives.
//!
//! Every operation is a free function over borrowed `&str` input that returns
//! a freshly owned value. Offsets and lengths are byte offsets; searches
//! report "no match" as `None`, never as a sentinel offset.
//!
//! ```
//! use phpstring_core::{Separator, basename, find_forward, split, trim};
//!
//! assert_eq!(trim("  hello \n"), "hello");
//! assert_eq!(find_forward("hello world", "world", 0), Some(6));
//! assert_eq!(split("a,b,,c", ","), ["a", "b", "", "c"]);
//! assert_eq!(basename("/usr/local/bin", Separator::Slash), "bin");
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that downstream macros can refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{borrow::ToOwned, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod accessors;
pub mod collection;
pub mod error;
pub mod path;
pub mod transform;

pub use accessors::{
    compare, compare_bounded, find_backward, find_forward, length, locate, substring,
    try_substring,
};
pub use collection::{contains, join, split};
pub use error::{Error, Result};
pub use path::{Separator, basename, dirname, extension, filename, normalize_separators};
pub use transform::{
    Side, partition, partition_flag, replace_all, replace_n, reverse, to_lower, to_upper, trim,
    trim_left, trim_right,
};

static_assertions::assert_impl_all!(Error: Send, Sync, Clone);
static_assertions::assert_impl_all!(Separator: Send, Sync, Copy);
static_assertions::assert_impl_all!(Side: Send, Sync, Copy);

/// Snaps a byte offset down to the closest UTF-8 character boundary of `s`,
/// clamping it to `s.len()` first.
pub(crate) fn floor_boundary(s: &str, offset: usize) -> usize {
    let mut offset = offset.min(s.len());
    while !s.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
