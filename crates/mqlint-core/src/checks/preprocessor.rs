//! Preprocessor directive validation.

use std::sync::LazyLock;

use regex::Regex;

use super::CheckContext;
use crate::builtins::is_valid_property;
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::text::Line;

static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([a-zA-Z_][a-zA-Z0-9_]*)").expect("valid regex"));

static PROPERTY_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#property\s+([a-zA-Z_][a-zA-Z0-9_]*)").expect("valid regex")
});

/// Check every `#name` on a line.
///
/// Unknown directives are errors. A known `#property` whose key is not on
/// the property list is a warning.
pub fn check_line(ctx: &CheckContext<'_>, line: Line<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for caps in DIRECTIVE.captures_iter(line.bare) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if !ctx.tables.is_directive(name.as_str()) {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::InvalidPreprocessor,
                ctx.doc.span(line.number, whole.start(), whole.end()),
                format!("Invalid preprocessor directive '#{}'", name.as_str()),
            ));
            continue;
        }

        if name.as_str() != "property" {
            continue;
        }
        let key = PROPERTY_KEY
            .captures(&line.bare[whole.start()..])
            .and_then(|caps| caps.get(1));
        if let Some(key) = key
            && !is_valid_property(key.as_str())
        {
            let start = whole.start() + key.start();
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::InvalidPropertyValue,
                ctx.doc.span(line.number, start, start + key.len()),
                format!(
                    "Invalid property value '{}' for #property directive",
                    key.as_str()
                ),
            ));
        }
    }

    diagnostics
}
