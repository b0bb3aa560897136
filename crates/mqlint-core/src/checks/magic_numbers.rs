//! Multi-digit numeric literals.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::text::Document;

// Single digits, including 0, 1 and -1, never match.
static MAGIC_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2,}\b").expect("valid regex"));

/// Report each integer literal of two or more digits.
#[tracing::instrument(skip_all)]
pub fn check(doc: &Document<'_>) -> Vec<Diagnostic> {
    doc.lines()
        .flat_map(|line| {
            MAGIC_NUMBER.find_iter(line.bare).map(move |m| {
                Diagnostic::new(
                    DiagnosticCode::MagicNumber,
                    doc.span(line.number, m.start(), m.end()),
                    format!(
                        "Consider replacing magic number '{}' with a named constant",
                        m.as_str()
                    ),
                )
            })
        })
        .collect()
}
