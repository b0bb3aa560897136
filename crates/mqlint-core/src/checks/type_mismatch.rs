//! Literal-versus-declared-type heuristics.
//!
//! Four independent single-line patterns. Nothing here follows
//! reassignment, expressions or return types.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::{Diagnostic, DiagnosticCode, Severity};
use crate::text::Document;

static STRING_TO_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\b(int|double|float|char|short|long|uchar|ushort|uint|ulong)\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*("[^"]*")"#,
    )
    .expect("valid regex")
});

static NUMERIC_TO_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bstring\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*([0-9]+\.?[0-9]*)")
        .expect("valid regex")
});

static BOOL_TO_NON_BOOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(string|datetime|color)\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*(true|false)\b")
        .expect("valid regex")
});

static COLOR_TO_NON_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(int|uint|long|ulong|double|float|string|bool|datetime)\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*(clr[A-Z][a-zA-Z]+)\b",
    )
    .expect("valid regex")
});

/// Integer types may hold colour values.
const COLOR_CAPABLE: &[&str] = &["int", "uint", "long", "ulong"];

/// Run the four patterns over every line.
///
/// Each pattern reports at most once per line. A string literal assigned to
/// a numeric type is an error; the rest are warnings.
#[tracing::instrument(skip_all)]
pub fn check(doc: &Document<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for line in doc.lines() {
        let bare = line.bare;
        let span = |m: regex::Match<'_>| doc.span(line.number, m.start(), m.end());

        if let Some(caps) = STRING_TO_NUMERIC.captures(bare)
            && let (Some(ty), Some(name), Some(literal)) = (caps.get(1), caps.get(2), caps.get(3))
        {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::TypeMismatch,
                    span(literal),
                    format!(
                        "Cannot assign string value to {} variable '{}'",
                        ty.as_str(),
                        name.as_str()
                    ),
                )
                .with_severity(Severity::Error),
            );
        }

        if let Some(caps) = NUMERIC_TO_STRING.captures(bare)
            && let (Some(name), Some(value)) = (caps.get(1), caps.get(2))
        {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::TypeMismatch,
                span(value),
                format!(
                    "Numeric value {} should be enclosed in quotes for string variable '{}'",
                    value.as_str(),
                    name.as_str()
                ),
            ));
        }

        if let Some(caps) = BOOL_TO_NON_BOOL.captures(bare)
            && let (Some(ty), Some(name), Some(value)) = (caps.get(1), caps.get(2), caps.get(3))
        {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::TypeMismatch,
                span(value),
                format!(
                    "Cannot assign boolean value to {} variable '{}'",
                    ty.as_str(),
                    name.as_str()
                ),
            ));
        }

        if let Some(caps) = COLOR_TO_NON_COLOR.captures(bare)
            && let (Some(ty), Some(name), Some(value)) = (caps.get(1), caps.get(2), caps.get(3))
            && !COLOR_CAPABLE.contains(&ty.as_str())
        {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::TypeMismatch,
                span(value),
                format!(
                    "Cannot assign color value to {} variable '{}'",
                    ty.as_str(),
                    name.as_str()
                ),
            ));
        }
    }

    diagnostics
}
