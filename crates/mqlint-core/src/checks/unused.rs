//! Variables declared and never mentioned again.

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::IDENTIFIER;
use crate::diagnostic::{Diagnostic, DiagnosticCode, Range};
use crate::symbols::{SCALAR_TYPES, STRUCT_TYPES};
use crate::text::Document;

static DECLARATIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let types = format!("{SCALAR_TYPES}|{STRUCT_TYPES}");
    [
        format!(r"\b(?:{types})\s+([a-zA-Z_][a-zA-Z0-9_]*)"),
        format!(r"\b(?:public|private|protected)\s+(?:{types})\s+([a-zA-Z_][a-zA-Z0-9_]*)"),
        r"\b[A-Z][a-zA-Z0-9_]*\s+([a-zA-Z_][a-zA-Z0-9_]*)".to_string(),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

/// Report declarations whose name occurs exactly once in the document.
///
/// Names followed by `(` declare functions and are not considered. Later
/// declarations of the same name move the reported position but keep the
/// name's place in the output order.
#[tracing::instrument(skip_all)]
pub fn check(doc: &Document<'_>) -> Vec<Diagnostic> {
    let text = doc.bare_text();

    let mut declared: IndexMap<&str, Range> = IndexMap::new();
    for pattern in DECLARATIONS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(name) = caps.get(1) else { continue };
            if text[name.end()..].trim_start().starts_with('(') {
                continue;
            }
            declared.insert(name.as_str(), doc.span_at(name.start(), name.end()));
        }
    }

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for token in IDENTIFIER.find_iter(text) {
        *occurrences.entry(token.as_str()).or_default() += 1;
    }

    declared
        .into_iter()
        .filter(|(name, _)| occurrences.get(name).copied() == Some(1))
        .map(|(name, range)| {
            Diagnostic::new(
                DiagnosticCode::UnusedVariable,
                range,
                format!("Unused variable '{name}'"),
            )
        })
        .collect()
}
