//! printf-style formatting into a growable buffer.
//!
//! `sprintf` parses the format string up front, then renders every directive
//! into a `String` that grows as needed: there is no fixed-size buffer and no
//! truncation. Arguments are typed [`Arg`] values, so a directive that does not
//! match its argument is reported as an error instead of reading garbage.
//!
//! ```
//! use phpstring_fmt::sprintf;
//!
//! let line = sprintf!("%-6s|%05.1f|%#x", "temp", 21.456, 255).unwrap();
//! assert_eq!(line, "temp  |021.5|0xff");
//! ```

use std::ops::Range;
use thiserror::Error;

mod arg;
pub mod directive;

pub use arg::Arg;
use directive::{Conversion, Directive, Piece};

static_assertions::assert_impl_all!(Arg<'static>: Send, Sync);
static_assertions::assert_impl_all!(FormatError: Send, Sync, Clone);

/// Why a format string could not be applied to its arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The directive ends in a letter that is not a known conversion.
    #[error("unknown conversion `%{conversion}`")]
    UnknownConversion { conversion: char, span: Range<usize> },

    /// There are fewer arguments than directives.
    #[error("missing argument {position} for this directive")]
    MissingArgument { position: usize, span: Range<usize> },

    /// The argument's type cannot be rendered by the directive.
    #[error("argument {position} is a {found}, but `%{conversion}` expects {expected}")]
    TypeMismatch {
        position: usize,
        conversion: char,
        expected: &'static str,
        found: &'static str,
        span: Range<usize>,
    },

    /// The format string ends before a directive's conversion letter.
    #[error("format string ends inside a directive")]
    Incomplete { span: Range<usize> },

    /// A width or precision exceeds [`directive::MAX_WIDTH`].
    #[error("width or precision is too large")]
    WidthTooLarge { span: Range<usize> },
}

impl FormatError {
    /// Byte range of the offending directive in the format string.
    pub fn span(&self) -> Range<usize> {
        match self {
            FormatError::UnknownConversion { span, .. }
            | FormatError::MissingArgument { span, .. }
            | FormatError::TypeMismatch { span, .. }
            | FormatError::Incomplete { span }
            | FormatError::WidthTooLarge { span } => span.clone(),
        }
    }

    /// Stable error code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            FormatError::UnknownConversion { .. } => "F001",
            FormatError::MissingArgument { .. } => "F002",
            FormatError::TypeMismatch { .. } => "F003",
            FormatError::Incomplete { .. } => "F004",
            FormatError::WidthTooLarge { .. } => "F005",
        }
    }

    /// Suggestion shown alongside the error, if any.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            FormatError::UnknownConversion { .. } => {
                Some("Supported conversions are d i u x X o b c e E f F s, and %% for a literal %")
            }
            FormatError::MissingArgument { .. } => Some("Pass one argument per directive"),
            FormatError::Incomplete { .. } => Some("Write %% for a literal percent sign"),
            FormatError::TypeMismatch { .. } | FormatError::WidthTooLarge { .. } => None,
        }
    }
}

/// Format `args` according to `format`.
///
/// Arguments are consumed left to right, one per directive; extra arguments
/// are ignored.
///
/// # Errors
///
/// Returns a [`FormatError`] when the format string is malformed, when there
/// are fewer arguments than directives, or when an argument cannot be
/// rendered by its directive (e.g. `%d` given a string).
pub fn sprintf(format: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    let pieces = directive::parse(format).inspect_err(|err| {
        tracing::debug!(error = %err, "malformed format string");
    })?;

    let mut out = String::with_capacity(format.len());
    let mut next = 0;

    for piece in pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Directive(directive) => {
                let position = next + 1;
                let arg = args.get(next).ok_or(FormatError::MissingArgument {
                    position,
                    span: directive.span.clone(),
                })?;
                write_directive(&mut out, &directive, arg, position)?;
                next += 1;
            }
        }
    }

    if next < args.len() {
        tracing::trace!(unused = args.len() - next, "ignoring extra sprintf arguments");
    }
    Ok(out)
}

/// Format arguments with [`sprintf`], converting each one with `Arg::from`.
///
/// ```
/// let s = phpstring_fmt::sprintf!("%s has %d items", "cart", 3).unwrap();
/// assert_eq!(s, "cart has 3 items");
/// ```
#[macro_export]
macro_rules! sprintf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::sprintf($format, &[$($crate::Arg::from($arg)),*])
    };
}

fn mismatch(
    directive: &Directive,
    arg: &Arg<'_>,
    position: usize,
    expected: &'static str,
) -> FormatError {
    FormatError::TypeMismatch {
        position,
        conversion: directive.letter,
        expected,
        found: arg.kind(),
        span: directive.span.clone(),
    }
}

fn write_directive(
    out: &mut String,
    directive: &Directive,
    arg: &Arg<'_>,
    position: usize,
) -> Result<(), FormatError> {
    let flags = directive.flags;
    let mut zero_pad = flags.zero && !flags.left && directive.conversion.is_numeric();

    let (sign, prefix, body): (&str, &str, String) = match directive.conversion {
        Conversion::Signed => {
            let value = match *arg {
                Arg::Int(v) => i128::from(v),
                Arg::UInt(v) => i128::from(v),
                _ => return Err(mismatch(directive, arg, position, "an integer")),
            };
            let sign = if value < 0 {
                "-"
            } else {
                plus_sign(flags)
            };
            let digits = integer_digits(value.unsigned_abs().to_string(), directive.precision);
            (sign, "", digits)
        }
        Conversion::Unsigned
        | Conversion::HexLower
        | Conversion::HexUpper
        | Conversion::Octal
        | Conversion::Binary => {
            let value = match *arg {
                // Negative values print as their two's complement bit pattern.
                Arg::Int(v) => v as u64,
                Arg::UInt(v) => v,
                _ => return Err(mismatch(directive, arg, position, "an integer")),
            };
            let (digits, prefix) = match directive.conversion {
                Conversion::HexLower => (format!("{value:x}"), "0x"),
                Conversion::HexUpper => (format!("{value:X}"), "0X"),
                Conversion::Octal => (format!("{value:o}"), "0"),
                Conversion::Binary => (format!("{value:b}"), "0b"),
                _ => (value.to_string(), ""),
            };
            let digits = integer_digits(digits, directive.precision);
            let prefix = if flags.alternate && value != 0 && !digits.starts_with(prefix) {
                prefix
            } else {
                ""
            };
            ("", prefix, digits)
        }
        Conversion::Char => {
            let ch = match *arg {
                Arg::Char(c) => Some(c),
                Arg::Int(v) => u32::try_from(v).ok().and_then(char::from_u32),
                Arg::UInt(v) => u32::try_from(v).ok().and_then(char::from_u32),
                _ => None,
            };
            let Some(ch) = ch else {
                return Err(mismatch(directive, arg, position, "a char or a valid code point"));
            };
            ("", "", ch.to_string())
        }
        Conversion::Exponent { upper } | Conversion::Fixed { upper } => {
            let value = match *arg {
                Arg::Float(v) => v,
                Arg::Int(v) => v as f64,
                Arg::UInt(v) => v as f64,
                _ => return Err(mismatch(directive, arg, position, "a number")),
            };
            let sign = if value.is_sign_negative() && !value.is_nan() {
                "-"
            } else {
                plus_sign(flags)
            };
            let precision = directive.precision.unwrap_or(6);
            let magnitude = value.abs();

            let body = if !magnitude.is_finite() {
                zero_pad = false;
                let text = if magnitude.is_nan() { "nan" } else { "inf" };
                if upper { text.to_ascii_uppercase() } else { text.to_string() }
            } else if matches!(directive.conversion, Conversion::Exponent { .. }) {
                exponent_digits(magnitude, precision, upper)
            } else {
                format!("{magnitude:.precision$}")
            };
            (sign, "", body)
        }
        Conversion::Str => {
            let text = arg.to_string();
            let text = match directive.precision {
                Some(max) => text.chars().take(max).collect(),
                None => text,
            };
            ("", "", text)
        }
    };

    // An explicit precision on an integer already fixes its digit count.
    if directive.conversion.is_integer() && directive.precision.is_some() {
        zero_pad = false;
    }

    let len = sign.len() + prefix.len() + body.chars().count();
    let padding = directive.width.unwrap_or(0).saturating_sub(len);

    if flags.left {
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(&body);
        push_repeated(out, ' ', padding);
    } else if zero_pad {
        out.push_str(sign);
        out.push_str(prefix);
        push_repeated(out, '0', padding);
        out.push_str(&body);
    } else {
        push_repeated(out, ' ', padding);
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(&body);
    }
    Ok(())
}

fn plus_sign(flags: directive::Flags) -> &'static str {
    if flags.plus {
        "+"
    } else if flags.space {
        " "
    } else {
        ""
    }
}

/// Apply an integer precision: the minimum number of digits to print.
fn integer_digits(digits: String, precision: Option<usize>) -> String {
    match precision {
        // Zero printed with precision 0 has no digits at all.
        Some(0) if digits == "0" => String::new(),
        Some(min) if digits.len() < min => {
            let mut padded = "0".repeat(min - digits.len());
            padded.push_str(&digits);
            padded
        }
        _ => digits,
    }
}

/// `d.ddde±XX` with at least two exponent digits.
fn exponent_digits(magnitude: f64, precision: usize, upper: bool) -> String {
    let formatted = format!("{magnitude:.precision$e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    let marker = if upper { 'E' } else { 'e' };
    format!("{mantissa}{marker}{sign}{:02}", exponent.unsigned_abs())
}

fn push_repeated(out: &mut String, ch: char, count: usize) {
    out.extend(std::iter::repeat_n(ch, count));
}
