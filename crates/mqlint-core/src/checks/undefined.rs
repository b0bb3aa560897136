//! Undefined variable and undefined function checks.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::{CheckContext, IDENTIFIER};
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::symbols::SCALAR_TYPES;

static CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").expect("valid regex"));

/// Member access (`obj.x`, `ptr->x`, `Class::x`) ends right before `end`.
fn is_member_access(text: &str, end: usize) -> bool {
    let before = text[..end].trim_end();
    before.ends_with('.') || before.ends_with("->") || before.ends_with("::")
}

/// Report every use of an identifier that is neither declared nor known.
///
/// Every identifier-shaped token in the literal-free text is checked,
/// including those on preprocessor lines, call sites and member names.
#[tracing::instrument(skip_all)]
pub fn check_variables(ctx: &CheckContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for line in ctx.doc.lines() {
        for token in IDENTIFIER.find_iter(line.bare) {
            let name = token.as_str();
            if ctx.tables.is_known(name)
                || ctx.tables.is_suppressed(name)
                || ctx.symbols.is_declared(name)
            {
                continue;
            }
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::UndefinedVariable,
                ctx.doc.span(line.number, token.start(), token.end()),
                format!("Undefined variable '{name}'"),
            ));
        }
    }

    diagnostics
}

/// Answers "is this function declared anywhere in the document?" by
/// searching the text, remembering each answer for the run.
struct DeclarationLookup<'t> {
    text: &'t str,
    cache: RefCell<HashMap<String, bool>>,
}

impl<'t> DeclarationLookup<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn is_declared(&self, name: &str) -> bool {
        if let Some(&known) = self.cache.borrow().get(name) {
            return known;
        }
        let declared = self.search(name);
        self.cache.borrow_mut().insert(name.to_string(), declared);
        declared
    }

    fn search(&self, name: &str) -> bool {
        let name = regex::escape(name);
        let body = r"\s*\([^)]*\)\s*(?:\{|;)";
        let patterns = [
            format!(r"\b(?:void|{SCALAR_TYPES})\s+{name}{body}"),
            format!(r"\b(?:public|private|protected|virtual)?\s*(?:void|{SCALAR_TYPES})\s+{name}{body}"),
            format!(r"\b{name}{body}"),
        ];
        patterns.iter().any(|pattern| {
            Regex::new(pattern)
                .map(|re| re.is_match(self.text))
                .unwrap_or(false)
        })
    }
}

/// Report calls to functions that are neither builtin nor declared.
///
/// A function counts as declared when a declaration-shaped match for its
/// name exists anywhere in the text, which includes a call used as a whole
/// statement.
#[tracing::instrument(skip_all)]
pub fn check_functions(ctx: &CheckContext<'_>) -> Vec<Diagnostic> {
    let text = ctx.doc.bare_text();
    let lookup = DeclarationLookup::new(text);
    let mut diagnostics = Vec::new();

    for caps in CALL.captures_iter(text) {
        let Some(name) = caps.get(1) else { continue };
        if ctx.tables.is_known(name.as_str())
            || is_member_access(text, name.start())
            || lookup.is_declared(name.as_str())
        {
            continue;
        }
        diagnostics.push(Diagnostic::new(
            DiagnosticCode::UndefinedFunction,
            ctx.doc.span_at(name.start(), name.end()),
            format!("Undefined function '{}'", name.as_str()),
        ));
    }

    diagnostics
}
