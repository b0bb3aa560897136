//! Heuristic checkers.
//!
//! Every checker is a pure function over a [`CheckContext`]. The three
//! family runners, [`syntax`], [`semantic`] and [`style`], call them in a
//! fixed order and concatenate the results; the aggregator in
//! [`crate::engine`] runs the families in that order.
//!
//! Syntax checks are line based. The bracket matcher is the one stateful
//! piece: its stack lives for a single [`syntax`] call and is drained into
//! `unclosed-bracket` diagnostics after the last line.

pub mod brackets;
pub mod declarations;
pub mod long_function;
pub mod magic_numbers;
pub mod nesting;
pub mod preprocessor;
pub mod semicolon;
pub mod type_mismatch;
pub mod undefined;
pub mod unreachable;
pub mod unused;

use std::sync::LazyLock;

use regex::Regex;

use crate::builtins::BuiltinTables;
use crate::diagnostic::Diagnostic;
use crate::dialect::Dialect;
use crate::symbols::SymbolTable;
use crate::text::Document;

/// Identifier-shaped token.
pub(crate) static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z_][a-zA-Z0-9_]*\b").expect("valid regex"));

/// Everything a checker may consult for one run.
#[derive(Debug)]
pub struct CheckContext<'a> {
    /// The document being checked.
    pub doc: Document<'a>,
    /// Allow-lists for the document's dialect.
    pub tables: BuiltinTables,
    /// Declarations found in the document.
    pub symbols: SymbolTable,
}

impl<'a> CheckContext<'a> {
    /// Prepare `text` for checking.
    pub fn new(text: &'a str, dialect: Dialect) -> Self {
        let doc = Document::new(text);
        let symbols = SymbolTable::extract(&doc);
        Self {
            doc,
            tables: BuiltinTables::for_dialect(dialect),
            symbols,
        }
    }
}

/// Line-level syntax checks followed by unclosed brackets.
///
/// Per line the order is: missing semicolon, brackets, declarations,
/// preprocessor directives.
#[tracing::instrument(skip_all)]
pub fn syntax(ctx: &CheckContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut matcher = brackets::BracketMatcher::default();

    for line in ctx.doc.lines() {
        diagnostics.extend(semicolon::check_line(&ctx.doc, line));
        diagnostics.extend(matcher.scan_line(&ctx.doc, line));
        diagnostics.extend(declarations::check_line(ctx, line));
        diagnostics.extend(preprocessor::check_line(ctx, line));
    }
    diagnostics.extend(matcher.finish(&ctx.doc));

    tracing::debug!(count = diagnostics.len(), "syntax checks complete");
    diagnostics
}

/// Symbol and type heuristics.
#[tracing::instrument(skip_all)]
pub fn semantic(ctx: &CheckContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = undefined::check_variables(ctx);
    diagnostics.extend(undefined::check_functions(ctx));
    diagnostics.extend(type_mismatch::check(&ctx.doc));
    diagnostics.extend(unreachable::check(&ctx.doc));

    tracing::debug!(count = diagnostics.len(), "semantic checks complete");
    diagnostics
}

/// Best-practice suggestions.
#[tracing::instrument(skip_all)]
pub fn style(ctx: &CheckContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = unused::check(&ctx.doc);
    diagnostics.extend(magic_numbers::check(&ctx.doc));
    diagnostics.extend(long_function::check(&ctx.doc));
    diagnostics.extend(nesting::check(&ctx.doc));

    tracing::debug!(count = diagnostics.len(), "style checks complete");
    diagnostics
}
