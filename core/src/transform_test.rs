//! Tests for the transformers

use super::*;
use pretty_assertions::assert_eq;

const SAMPLES: &[&str] = &[
    "",
    " ",
    "abc",
    "  abc  ",
    "\t\r\n",
    "   \t\n ",
    "a b\tc",
    "\n\nline\n",
    "añb",
    " café ",
];

// ============================================================================
// Trim
// ============================================================================

#[test]
fn test_trim() {
    assert_eq!(trim("  hello  "), "hello");
    assert_eq!(trim("\t\r\nhello\n"), "hello");
    assert_eq!(trim("abc"), "abc");
    assert_eq!(trim(""), "");

    // Interior whitespace is kept
    assert_eq!(trim(" a b "), "a b");
}

#[test]
fn test_trim_all_whitespace() {
    assert_eq!(trim("   \t\n "), "");
    assert_eq!(trim_left("   \t\n "), "");
    assert_eq!(trim_right("   \t\n "), "");
    assert_eq!(trim(" "), "");
}

#[test]
fn test_trim_left_and_right() {
    assert_eq!(trim_left("  hello  "), "hello  ");
    assert_eq!(trim_right("  hello  "), "  hello");

    // Nothing to remove on that side
    assert_eq!(trim_left("hello "), "hello ");
    assert_eq!(trim_right(" hello"), " hello");

    // Last non-whitespace character is kept
    assert_eq!(trim_right("ab\n"), "ab");
    assert_eq!(trim_right("a"), "a");
}

#[test]
fn test_trim_only_ascii_whitespace_set() {
    // Vertical tab, form feed and NBSP are not stripped
    assert_eq!(trim("\x0babc\x0c"), "\x0babc\x0c");
    assert_eq!(trim("\u{a0}abc"), "\u{a0}abc");
}

#[test]
fn test_trim_idempotent() {
    for s in SAMPLES {
        let once = trim(s);
        assert_eq!(trim(&once), once, "trim not idempotent for {s:?}");
        assert_eq!(trim_left(&trim_left(s)), trim_left(s));
        assert_eq!(trim_right(&trim_right(s)), trim_right(s));
    }
}

#[test]
fn test_trim_keeps_content() {
    for s in SAMPLES {
        let trimmed = trim(s);
        assert!(s.contains(trimmed.as_str()));
        let stripped: String = s.chars().filter(|c| !WHITESPACE.contains(c)).collect();
        let kept: String = trimmed.chars().filter(|c| !WHITESPACE.contains(c)).collect();
        assert_eq!(kept, stripped, "trim dropped content of {s:?}");
    }
}

// ============================================================================
// Reverse
// ============================================================================

#[test]
fn test_reverse() {
    assert_eq!(reverse("hello"), "olleh");
    assert_eq!(reverse(""), "");
    assert_eq!(reverse("a"), "a");
    assert_eq!(reverse("ab"), "ba");
}

#[test]
fn test_reverse_multibyte() {
    assert_eq!(reverse("añb"), "bña");
}

#[test]
fn test_reverse_involution() {
    for s in SAMPLES {
        assert_eq!(reverse(&reverse(s)), s.to_string());
    }
}

// ============================================================================
// Case mapping
// ============================================================================

#[test]
fn test_to_upper() {
    assert_eq!(to_upper("Hello"), "HELLO");
    assert_eq!(to_upper("Hello123"), "HELLO123");
    assert_eq!(to_upper(""), "");

    // Non-ASCII characters pass through unchanged
    assert_eq!(to_upper("café"), "CAFé");
}

#[test]
fn test_to_lower() {
    assert_eq!(to_lower("Hello"), "hello");
    assert_eq!(to_lower("HELLO123"), "hello123");
    assert_eq!(to_lower("CAFÉ"), "cafÉ");
}

#[test]
fn test_case_round_trip_ascii() {
    for s in ["Hello", "MiXeD cAsE", "already upper", "123 !?"] {
        assert_eq!(to_upper(&to_lower(s)), to_upper(s));
        assert_eq!(to_lower(&to_upper(s)), to_lower(s));
    }
}

// ============================================================================
// Partition
// ============================================================================

#[test]
fn test_partition_before() {
    assert_eq!(partition("user@example.com", "@", Side::Before), "user");
    assert_eq!(partition("@example.com", "@", Side::Before), "");
    assert_eq!(partition("a::b::c", "::", Side::Before), "a");
}

#[test]
fn test_partition_after() {
    assert_eq!(
        partition("user@example.com", "@", Side::After),
        "@example.com"
    );
    // Multi-character needles are kept whole
    assert_eq!(partition("a::b::c", "::", Side::After), "::b::c");
    assert_eq!(partition("user@", "@", Side::After), "@");
}

#[test]
fn test_partition_missing_needle() {
    assert_eq!(partition("user", "@", Side::Before), "");
    assert_eq!(partition("user", "@", Side::After), "");
    assert_eq!(partition("", "@", Side::After), "");
}

#[test]
fn test_partition_flag() {
    assert_eq!(partition_flag("key=value", "=", true), "key");
    assert_eq!(partition_flag("key=value", "=", false), "=value");
}

// ============================================================================
// Replace
// ============================================================================

#[test]
fn test_replace_all() {
    assert_eq!(replace_all("hello world", "o", "0"), "hell0 w0rld");
    assert_eq!(replace_all("aaa", "a", "bb"), "bbbbbb");
    assert_eq!(replace_all("abc", "x", "y"), "abc");
    assert_eq!(replace_all("", "a", "b"), "");
    assert_eq!(replace_all("abab", "ab", ""), "");
}

#[test]
fn test_replace_all_does_not_rescan_replacement() {
    // The inserted "aa" must not be matched again
    assert_eq!(replace_all("a", "a", "aa"), "aa");
    assert_eq!(replace_all("xax", "a", "xax"), "xxaxx");
}

#[test]
fn test_replace_all_non_overlapping() {
    assert_eq!(replace_all("aaaa", "aa", "b"), "bb");
    assert_eq!(replace_all("aaa", "aa", "b"), "ba");
}

#[test]
fn test_replace_all_empty_pattern_is_noop() {
    crate::test_utils::init_test_logging();
    assert_eq!(replace_all("abc", "", "X"), "abc");
    assert_eq!(replace_all("", "", "X"), "");
}

#[test]
fn test_replace_n() {
    assert_eq!(replace_n("a-b-c-d", "-", "+", 2), "a+b+c-d");
    assert_eq!(replace_n("a-b", "-", "+", 0), "a-b");
    assert_eq!(replace_n("a-b", "-", "+", 10), "a+b");
    assert_eq!(replace_n("abc", "", "X", 3), "abc");
}
