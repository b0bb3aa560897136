//! Code following a `return` in the same block.

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::text::Document;

fn is_return(code: &str) -> bool {
    code == "return;" || code.starts_with("return ")
}

/// Report the first statement after each `return`.
///
/// The forward scan stops at a blank line or at a line that is only `}`;
/// comment-only lines are stepped over. Branch keywords are not stops, so an
/// `else` right after an unbraced `return` is reported.
#[tracing::instrument(skip_all)]
pub fn check(doc: &Document<'_>) -> Vec<Diagnostic> {
    let lines: Vec<_> = doc.lines().collect();
    let mut diagnostics = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !is_return(line.code.trim()) {
            continue;
        }
        for next in &lines[i + 1..] {
            let code = next.code.trim();
            if next.raw.trim().is_empty() || code == "}" {
                break;
            }
            if code.is_empty() {
                continue;
            }
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::UnreachableCode,
                doc.full_line(next.number),
                "Unreachable code detected",
            ));
            break;
        }
    }

    diagnostics
}
