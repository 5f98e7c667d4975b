use std::borrow::Cow;
use std::fmt;

/// A value consumed by one `sprintf` directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    Char(char),
}

impl Arg<'_> {
    /// Human-readable name of the argument's type, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Int(_) => "integer",
            Arg::UInt(_) => "unsigned integer",
            Arg::Float(_) => "float",
            Arg::Str(_) => "string",
            Arg::Char(_) => "char",
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(v) => write!(f, "{v}"),
            Arg::UInt(v) => write!(f, "{v}"),
            Arg::Float(v) => write!(f, "{v}"),
            Arg::Str(s) => f.write_str(s),
            Arg::Char(c) => write!(f, "{c}"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Arg<'_> {
                fn from(value: $source) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from!(Int as i64: i8, i16, i32, i64, isize);
impl_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_from!(Float as f64: f32, f64);

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Arg::Str(Cow::Owned(value))
    }
}
