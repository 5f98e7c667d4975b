//! Parser for printf-style format strings.
//!
//! Grammar of one directive: `%[flags][width][.precision][length]conversion`.
//! Length modifiers (`h`, `l`, `ll`, `L`, `j`, `z`, `t`) are accepted and
//! ignored since arguments carry their own type.

use crate::FormatError;
use std::ops::Range;

/// Largest width or precision a directive may request.
pub const MAX_WIDTH: usize = u16::MAX as usize;

/// Flag characters of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// `-`: pad on the right.
    pub left: bool,
    /// `0`: pad numbers with zeros.
    pub zero: bool,
    /// `+`: always print a sign.
    pub plus: bool,
    /// ` `: print a space where a `+` would go.
    pub space: bool,
    /// `#`: alternate form (`0x`, `0b` and `0` prefixes).
    pub alternate: bool,
}

/// Conversion selected by the directive's final letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `d`, `i`
    Signed,
    /// `u`
    Unsigned,
    /// `x`
    HexLower,
    /// `X`
    HexUpper,
    /// `o`
    Octal,
    /// `b`
    Binary,
    /// `c`
    Char,
    /// `e`, `E`
    Exponent { upper: bool },
    /// `f`, `F`
    Fixed { upper: bool },
    /// `s`
    Str,
}

impl Conversion {
    fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            'd' | 'i' => Conversion::Signed,
            'u' => Conversion::Unsigned,
            'x' => Conversion::HexLower,
            'X' => Conversion::HexUpper,
            'o' => Conversion::Octal,
            'b' => Conversion::Binary,
            'c' => Conversion::Char,
            'e' => Conversion::Exponent { upper: false },
            'E' => Conversion::Exponent { upper: true },
            'f' => Conversion::Fixed { upper: false },
            'F' => Conversion::Fixed { upper: true },
            's' => Conversion::Str,
            _ => return None,
        })
    }

    /// Whether the `0` flag applies to this conversion.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Conversion::Char | Conversion::Str)
    }

    /// Whether this conversion prints an integer, where precision means minimum digits.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Conversion::Signed
                | Conversion::Unsigned
                | Conversion::HexLower
                | Conversion::HexUpper
                | Conversion::Octal
                | Conversion::Binary
        )
    }
}

/// A parsed `%` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Flags written between `%` and the width.
    pub flags: Flags,
    /// Minimum field width in characters.
    pub width: Option<usize>,
    /// Digits after the point, minimum integer digits, or maximum string length.
    pub precision: Option<usize>,
    /// What the argument is rendered as.
    pub conversion: Conversion,
    /// Conversion character as written, for error messages.
    pub letter: char,
    /// Byte range of the whole directive in the format string.
    pub span: Range<usize>,
}

/// One parsed chunk of a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text copied to the output as-is (`%%` becomes `"%"`).
    Literal(&'a str),
    /// A `%` directive that consumes one argument.
    Directive(Directive),
}

/// Split `format` into literal text and directives.
pub fn parse(format: &str) -> Result<Vec<Piece<'_>>, FormatError> {
    let bytes = format.as_bytes();
    let mut pieces = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        if literal_start < i {
            pieces.push(Piece::Literal(&format[literal_start..i]));
        }

        let start = i;
        i += 1;

        if bytes.get(i) == Some(&b'%') {
            pieces.push(Piece::Literal("%"));
            i += 1;
            literal_start = i;
            continue;
        }

        let mut flags = Flags::default();
        while let Some(&b) = bytes.get(i) {
            match b {
                b'-' => flags.left = true,
                b'0' => flags.zero = true,
                b'+' => flags.plus = true,
                b' ' => flags.space = true,
                b'#' => flags.alternate = true,
                _ => break,
            }
            i += 1;
        }

        let width = parse_number(bytes, &mut i);
        let precision = if bytes.get(i) == Some(&b'.') {
            i += 1;
            Some(parse_number(bytes, &mut i).unwrap_or(0))
        } else {
            None
        };

        while matches!(
            bytes.get(i),
            Some(b'h' | b'l' | b'L' | b'j' | b'z' | b't')
        ) {
            i += 1;
        }

        // Everything consumed since `%` is ASCII, so `i` is a char boundary.
        let Some(letter) = format[i..].chars().next() else {
            return Err(FormatError::Incomplete {
                span: start..format.len(),
            });
        };
        let end = i + letter.len_utf8();
        let span = start..end;

        if width.is_some_and(|w| w > MAX_WIDTH) || precision.is_some_and(|p| p > MAX_WIDTH) {
            return Err(FormatError::WidthTooLarge { span });
        }

        let conversion = Conversion::from_char(letter).ok_or(FormatError::UnknownConversion {
            conversion: letter,
            span: span.clone(),
        })?;

        pieces.push(Piece::Directive(Directive {
            flags,
            width,
            precision,
            conversion,
            letter,
            span,
        }));
        i = end;
        literal_start = i;
    }

    if literal_start < bytes.len() {
        pieces.push(Piece::Literal(&format[literal_start..]));
    }
    Ok(pieces)
}

fn parse_number(bytes: &[u8], i: &mut usize) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(&b) = bytes.get(*i) {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = usize::from(b - b'0');
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit));
        *i += 1;
    }
    value
}

#[cfg(test)]
#[path = "directive_test.rs"]
mod directive_test;
