//! Error rendering using ariadne
//!
//! Compile errors are shown against the source text they came from, with the
//! offending token underlined and any help text attached.

use crate::{Diagnostic, Error};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expr>";

/// Render an error for `source` to stderr
///
/// # Example
/// ```no_run
/// use rpnexpr::{Engine, render_error};
///
/// let engine = Engine::default();
/// let source = "1 + * 2";
/// if let Err(e) = engine.compile(source, &["N"]) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String, with color codes
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostic(source, &error.to_diagnostic(), writer, use_color)
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    // Errors without a location (a type mismatch covers the whole input)
    // are anchored at the start and get no label.
    let range = diag.span.as_ref().map_or(0..0, |span| span.0.clone());

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, range.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    if diag.span.is_some() {
        report = report.with_label(
            Label::new((SOURCE_ID, range))
                .with_message(&diag.message)
                .with_color(colors.next()),
        );
    }

    for help_msg in &diag.help {
        report = report.with_help(help_msg);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
