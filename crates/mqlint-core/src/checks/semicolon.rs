//! Missing semicolon heuristic.
//!
//! A line-level check: statements spread over several lines are only
//! tolerated when a line ends with `,`, `&&` or `||`.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::{Diagnostic, DiagnosticCode, Range};
use crate::text::{Document, Line};

static CONTROL_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:if|else|for|while|do|switch|case|default)\b").expect("valid regex")
});

static INPUT_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^input\s+group\s+".*"\s*$"#).expect("valid regex"));

static ACCESS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:public|private|protected)\s*:$").expect("valid regex"));

const CONTINUATIONS: &[&str] = &[";", ",", "&&", "||", "{", "}", ")"];

/// Report a statement line that does not end with `;`.
///
/// The diagnostic is zero-width at the end of the raw line.
pub fn check_line(doc: &Document<'_>, line: Line<'_>) -> Option<Diagnostic> {
    let code = line.code.trim();
    if code.is_empty()
        || code.starts_with('#')
        || CONTINUATIONS.iter().any(|end| code.ends_with(end))
        || CONTROL_KEYWORD.is_match(code)
        || INPUT_GROUP.is_match(code)
        || ACCESS_LABEL.is_match(code)
    {
        return None;
    }

    let end = doc.line_len(line.number);
    Some(Diagnostic::new(
        DiagnosticCode::MissingSemicolon,
        Range::point(line.number, end),
        "Missing semicolon",
    ))
}
