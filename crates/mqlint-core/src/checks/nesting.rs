//! Brace nesting depth.

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::text::Document;

/// Deepest brace level that is not reported.
pub const MAX_NESTING: usize = 4;

/// Report every `{` that takes the running depth above [`MAX_NESTING`].
///
/// The depth is tracked across the whole document and never drops below
/// zero, so a stray `}` cannot hide later nesting.
#[tracing::instrument(skip_all)]
pub fn check(doc: &Document<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut depth: usize = 0;

    for line in doc.lines() {
        for (column, ch) in line.bare.char_indices() {
            match ch {
                '{' => {
                    depth += 1;
                    if depth > MAX_NESTING {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticCode::DeepNesting,
                            doc.span(line.number, column, column + 1),
                            format!("Deep nesting detected (level {depth}). Consider refactoring."),
                        ));
                    }
                }
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
    }

    diagnostics
}
