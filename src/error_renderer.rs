//! Error rendering using ariadne
//!
//! This module renders dexpr errors with the offending source snippet and a
//! label pointing at the failing sub-expression.

use crate::ExprError;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expr>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use dexpr::{Engine, render_error};
///
/// let source = "1 + ) 2";
/// if let Err(e) = Engine::default().compile(source) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &ExprError) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(error: &ExprError, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &ExprError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &ExprError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &ExprError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let source = error.text();
    // Without a span, point at the whole expression.
    let span = match error.span() {
        Some(span) => span.0.clone(),
        None => 0..source.len(),
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let message = error.kind().to_string();
    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message("invalid expression")
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(&message)
                .with_color(colors.next()),
        );

    if let Some(detail) = error.detail() {
        report = report.with_help(detail);
    }

    report.finish().write((SOURCE_ID, Source::from(source)), &mut *writer)
}
