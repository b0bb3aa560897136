//! Declaration shape checks: malformed function names and reserved words
//! used as variable names.

use std::sync::LazyLock;

use regex::Regex;

use super::CheckContext;
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::symbols::{SCALAR_TYPES, STRUCT_TYPES};
use crate::text::{self, Line};

/// `type name(` at the start of a line, with a deliberately loose name.
/// A `Class::` qualifier is matched outside the capture, so only the
/// method's own name is validated.
static FUNCTION_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:(?:public|private|protected|virtual|static)\s+)*(?:void|{SCALAR_TYPES})\s+(?:[a-zA-Z_][a-zA-Z0-9_]*::~?)?([^\s(=,;:]+)\s*\("
    ))
    .expect("valid regex")
});

/// Patterns whose capture group 1 is a declared name.
static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let types = format!("{SCALAR_TYPES}|void|enum|struct|class|{STRUCT_TYPES}");
    [
        format!(r"\b(?:{types})\s+([a-zA-Z_][a-zA-Z0-9_]*)\b"),
        format!(r"\b(?:public|private|protected)\s+(?:{types})\s+([a-zA-Z_][a-zA-Z0-9_]*)\b"),
        format!(r"\b(?:input|sinput|extern)\s+(?:{types}|ENUM_\w+)\s+([a-zA-Z_][a-zA-Z0-9_]*)\b"),
        r"\b[A-Z][a-zA-Z0-9_]*\s+([a-zA-Z_][a-zA-Z0-9_]*)\b".to_string(),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

/// Check one line for malformed function names and reserved-word names.
pub fn check_line(ctx: &CheckContext<'_>, line: Line<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if line.code.trim_start().starts_with('#') {
        return diagnostics;
    }

    if let Some(name) = FUNCTION_SHAPE.captures(line.bare).and_then(|caps| caps.get(1)) {
        let candidate = name.as_str();
        if !candidate.starts_with("operator") && !text::is_identifier(candidate) {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::InvalidFunctionName,
                ctx.doc.span(line.number, name.start(), name.end()),
                "Invalid function name",
            ));
        }
    }

    let mut reported: Vec<usize> = Vec::new();
    for pattern in NAME_PATTERNS.iter() {
        for caps in pattern.captures_iter(line.bare) {
            let Some(name) = caps.get(1) else { continue };
            // `bool operator==(...)` declares an operator, not a variable.
            if name.as_str() == "operator"
                || !ctx.tables.is_reserved(name.as_str())
                || reported.contains(&name.start())
            {
                continue;
            }
            reported.push(name.start());

            let is_array = line.bare[name.end()..].trim_start().starts_with('[');
            let role = if is_array { "an array name" } else { "a variable name" };
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::ReservedKeyword,
                ctx.doc.span(line.number, name.start(), name.end()),
                format!(
                    "'{}' is a reserved keyword and cannot be used as {role}",
                    name.as_str()
                ),
            ));
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::context;
    use crate::diagnostic::Range;

    fn check(source: &str) -> Vec<Diagnostic> {
        let ctx = context(source);
        ctx.doc.lines().flat_map(|line| check_line(&ctx, line)).collect()
    }

    #[test]
    fn reserved_word_as_variable() {
        let found = check("int if;");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, DiagnosticCode::ReservedKeyword);
        assert_eq!(found[0].range, Range::on_line(0, 4, 6));
        assert_eq!(
            found[0].message,
            "'if' is a reserved keyword and cannot be used as a variable name"
        );
    }

    #[test]
    fn ordinary_names_pass() {
        assert!(check("int count;\ninput double Lots = 0.1;\nCTrade trade;").is_empty());
    }

    #[test]
    fn reserved_word_as_array() {
        let found = check("double class[10];");
        assert_eq!(found.len(), 1);
        assert!(found[0].message.ends_with("as an array name"));
    }

    #[test]
    fn overlapping_patterns_report_once() {
        let found = check("public: int new;\ninput ENUM_TIMEFRAMES this = PERIOD_H1;");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].range.start.line, 1);
    }

    #[test]
    fn malformed_function_name() {
        let found = check("void my-func() {}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, DiagnosticCode::InvalidFunctionName);
        assert_eq!(found[0].range, Range::on_line(0, 5, 12));
    }

    #[test]
    fn out_of_class_method_definitions_pass() {
        let source = "class CFoo\n{\npublic:\n  void Run();\n};\nvoid CFoo::Run()\n{\n}\nint CFoo::Count() { return 0; }";
        assert!(check(source).is_empty());
    }

    #[test]
    fn malformed_method_name_is_reported_without_its_class() {
        let found = check("void CFoo::2run() {}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, DiagnosticCode::InvalidFunctionName);
        assert_eq!(found[0].range, Range::on_line(0, 11, 15));
    }

    #[test]
    fn operators_and_assignments_are_not_function_names() {
        assert!(check("bool operator==(const CFoo &other);\nint x=(a+b);").is_empty());
    }

    #[test]
    fn defines_are_skipped() {
        assert!(check("#define DEBUG true").is_empty());
    }
}
