//! Error rendering using ariadne
//!
//! Format errors are rendered with a snippet of the format string and a
//! label under the offending directive. Errors from the string primitives
//! have no source text to point at and render as a single line.

use crate::{Error, FormatError};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The name shown for the format string in error messages.
    /// Defaults to "<format>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use phpstring::{render_error, sprintf};
///
/// if let Err(e) = sprintf("%d apples", &[]) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use phpstring::{RenderConfig, render_error_to, sprintf};
///
/// let err = sprintf("%q", &[]).unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
///
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("unknown conversion `%q`"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    match error {
        Error::Format { error, format } => render_format_error(format, error, writer, config),
        Error::Text(err) => writeln!(writer, "[{}] Error: {}", error.code(), err),
    }
}

fn render_format_error(
    format: &str,
    error: &FormatError,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<format>");
    let message = error.to_string();
    let span = error.span();

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset);

    let mut report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(&message)
        .with_code(error.code())
        .with_config(ariadne_config)
        .with_label(
            Label::new((filename, span))
                .with_message(&message)
                .with_color(colors.next()),
        );

    if let Some(help) = error.help() {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(format)), &mut *writer)
}
