//! Functions whose bodies run past a line threshold.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::symbols::{SCALAR_TYPES, STRUCT_TYPES};
use crate::text::Document;

/// Longest function, in lines, that is not reported.
pub const MAX_FUNCTION_LINES: usize = 50;

static FUNCTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:void|{SCALAR_TYPES}|{STRUCT_TYPES}|[A-Z][a-zA-Z0-9_]*)\s+(?:[a-zA-Z_][a-zA-Z0-9_]*(?:::)?)?[a-zA-Z_][a-zA-Z0-9_]*\s*\("
    ))
    .expect("valid regex")
});

/// Report functions longer than [`MAX_FUNCTION_LINES`].
///
/// A function starts at a declaration-shaped line and ends on the first
/// line containing `}` that brings the brace count back to zero. The
/// diagnostic covers the whole first line.
#[tracing::instrument(skip_all)]
pub fn check(doc: &Document<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut start: Option<u32> = None;
    let mut depth: i64 = 0;

    for line in doc.lines() {
        if FUNCTION_START.is_match(line.bare) {
            start = Some(line.number);
            depth = 0;
        }

        for ch in line.bare.chars() {
            match ch {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
        }

        if let Some(first) = start
            && depth == 0
            && line.bare.contains('}')
        {
            let length = (line.number - first) as usize + 1;
            if length > MAX_FUNCTION_LINES {
                diagnostics.push(Diagnostic::new(
                    DiagnosticCode::LongFunction,
                    doc.full_line(first),
                    format!(
                        "Function is too long ({length} lines). Consider breaking it into smaller functions."
                    ),
                ));
            }
            start = None;
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Range;

    fn function(body_lines: usize) -> String {
        let mut source = String::from("void Process()\n{\n");
        for _ in 0..body_lines {
            source.push_str("  Tick();\n");
        }
        source.push_str("}\n");
        source
    }

    #[test]
    fn long_function_is_reported_at_its_header() {
        let found = check(&Document::new(&function(60)));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].range, Range::on_line(0, 0, 14));
        assert_eq!(
            found[0].message,
            "Function is too long (63 lines). Consider breaking it into smaller functions."
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(check(&Document::new(&function(47))).is_empty());
        assert_eq!(check(&Document::new(&function(48))).len(), 1);
    }

    #[test]
    fn nested_blocks_do_not_end_the_function() {
        let mut source = String::from("int Run() {\n");
        for _ in 0..30 {
            source.push_str("  if (a) { b(); }\n");
        }
        for _ in 0..30 {
            source.push_str("  c();\n");
        }
        source.push_str("}\n");
        assert_eq!(check(&Document::new(&source)).len(), 1);
    }
}
