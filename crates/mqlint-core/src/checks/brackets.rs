//! Bracket matching across the whole document.

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::text::{Document, Line};

/// An open bracket waiting for its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketEntry {
    /// `(`, `[` or `{`.
    pub open: char,
    /// Zero-based line.
    pub line: u32,
    /// Byte column in the line.
    pub column: usize,
}

const fn closing_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Stack machine validating `()`, `[]` and `{}` nesting.
///
/// Feed every line in order with [`BracketMatcher::scan_line`], then call
/// [`BracketMatcher::finish`]. Comments and literal contents are never
/// scanned.
#[derive(Debug, Default)]
pub struct BracketMatcher {
    stack: Vec<BracketEntry>,
}

impl BracketMatcher {
    /// Scan one line, returning unmatched and mismatched closers.
    ///
    /// On a mismatch the popped opener goes back on the stack, so a single
    /// stray closer does not unbalance the rest of the file.
    pub fn scan_line(&mut self, doc: &Document<'_>, line: Line<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (column, ch) in line.bare.char_indices() {
            if closing_for(ch).is_some() {
                self.stack.push(BracketEntry {
                    open: ch,
                    line: line.number,
                    column,
                });
                continue;
            }
            if !matches!(ch, ')' | ']' | '}') {
                continue;
            }

            let range = doc.span(line.number, column, column + 1);
            match self.stack.pop() {
                None => diagnostics.push(Diagnostic::new(
                    DiagnosticCode::UnmatchedBracket,
                    range,
                    format!("Unmatched closing bracket '{ch}'"),
                )),
                Some(top) => {
                    let expected = closing_for(top.open).unwrap_or(ch);
                    if expected != ch {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticCode::MismatchedBracket,
                            range,
                            format!("Mismatched bracket: expected '{expected}' but found '{ch}'"),
                        ));
                        self.stack.push(top);
                    }
                }
            }
        }

        diagnostics
    }

    /// Brackets still open, in the order they were opened.
    pub fn open_brackets(&self) -> &[BracketEntry] {
        &self.stack
    }

    /// Report every bracket left open.
    pub fn finish(self, doc: &Document<'_>) -> Vec<Diagnostic> {
        self.stack
            .into_iter()
            .map(|entry| {
                Diagnostic::new(
                    DiagnosticCode::UnclosedBracket,
                    doc.span(entry.line, entry.column, entry.column + 1),
                    format!("Unclosed bracket '{}'", entry.open),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Range;

    fn scan(source: &str) -> Vec<Diagnostic> {
        let doc = Document::new(source);
        let mut matcher = BracketMatcher::default();
        let mut found: Vec<Diagnostic> = doc
            .lines()
            .flat_map(|line| matcher.scan_line(&doc, line))
            .collect();
        found.extend(matcher.finish(&doc));
        found
    }

    #[test]
    fn well_nested_sequences_are_clean() {
        assert!(scan("(a[b]{c})").is_empty());
        assert!(scan("void f(int a[])\n{\n  if (a[0] > 1) { g(); }\n}").is_empty());
    }

    #[test]
    fn unclosed_brace_is_reported_at_its_position() {
        let found = scan("int f() {");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, DiagnosticCode::UnclosedBracket);
        assert_eq!(found[0].range, Range::on_line(0, 8, 9));
        assert_eq!(found[0].message, "Unclosed bracket '{'");
    }

    #[test]
    fn stray_closer_on_empty_stack() {
        let found = scan("x = 1);");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, DiagnosticCode::UnmatchedBracket);
        assert_eq!(found[0].range, Range::on_line(0, 5, 6));
    }

    #[test]
    fn mismatch_keeps_opener_on_stack() {
        let found = scan("f(a];\n)");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, DiagnosticCode::MismatchedBracket);
        assert_eq!(found[0].message, "Mismatched bracket: expected ')' but found ']'");
    }

    #[test]
    fn stack_spans_lines() {
        let doc = Document::new("if (a &&\n    b)\n{");
        let mut matcher = BracketMatcher::default();
        for line in doc.lines() {
            assert!(matcher.scan_line(&doc, line).is_empty());
        }
        assert_eq!(matcher.open_brackets().len(), 1);
        assert_eq!(matcher.open_brackets()[0].line, 2);
    }

    #[test]
    fn comments_and_literals_are_skipped() {
        assert!(scan("Print(\"(\"); // )\n/* { */ x = ']';").is_empty());
    }
}
