//! Inline suppression directives.
//!
//! Parses line comments in the form:
//! - `// mqlint-disable code1, code2` suppresses codes until re-enabled
//! - `// mqlint-enable code1, code2` re-enables previously suppressed codes
//! - `// mqlint-disable-next-line code1` suppresses for the next line only
//!
//! The tag `all`, or no tag at all, stands for every code. Lines are
//! zero-based to match diagnostic positions.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::{Diagnostic, DiagnosticCode};

/// Tag matching every diagnostic code.
pub const ALL_CODES: &str = "all";

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//\s*mqlint-(disable-next-line|disable|enable)\b([\w,\s-]*)$")
        .expect("valid regex")
});

/// Map of code tags to their suppressed line ranges (inclusive).
#[derive(Debug, Clone, Default)]
pub struct SuppressionMap {
    suppressed: HashMap<String, Vec<(u32, u32)>>,
}

impl SuppressionMap {
    /// Returns `true` if `code` is suppressed at `line`.
    pub fn is_suppressed(&self, code: DiagnosticCode, line: u32) -> bool {
        [code.as_str(), ALL_CODES].iter().any(|tag| {
            self.suppressed
                .get(*tag)
                .is_some_and(|ranges| ranges.iter().any(|&(start, end)| (start..=end).contains(&line)))
        })
    }

    /// Returns `true` if no suppressions exist.
    pub fn is_empty(&self) -> bool {
        self.suppressed.is_empty()
    }

    /// All tags that have any suppression.
    pub fn suppressed_codes(&self) -> HashSet<&str> {
        self.suppressed.keys().map(String::as_str).collect()
    }

    /// Drop suppressed diagnostics, keeping the order of the rest.
    pub fn apply(&self, diagnostics: &mut Vec<Diagnostic>) {
        if self.is_empty() {
            return;
        }
        diagnostics.retain(|d| !self.is_suppressed(d.code, d.range.start.line));
    }

    fn add(&mut self, tag: &str, start: u32, end: u32) {
        self.suppressed
            .entry(tag.to_string())
            .or_default()
            .push((start, end));
    }
}

fn parse_tags(list: &str) -> Vec<&str> {
    let tags: Vec<&str> = list
        .split([',', ' ', '\t'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if tags.is_empty() { vec![ALL_CODES] } else { tags }
}

/// Parse suppression directives from document text.
///
/// An unclosed `disable` runs to the end of the document.
pub fn parse_suppressions(input: &str) -> SuppressionMap {
    let mut map = SuppressionMap::default();
    let mut open: HashMap<&str, u32> = HashMap::new();

    for (index, line) in input.split('\n').enumerate() {
        let line_num = u32::try_from(index).unwrap_or(u32::MAX);
        let Some(caps) = DIRECTIVE.captures(line.trim_end_matches('\r')) else {
            continue;
        };
        let tags = parse_tags(caps.get(2).map_or("", |m| m.as_str()));

        match &caps[1] {
            "disable" => {
                for tag in tags {
                    open.entry(tag).or_insert(line_num);
                }
            }
            "enable" => {
                for tag in tags {
                    if let Some(start) = open.remove(tag) {
                        map.add(tag, start, line_num);
                    }
                }
            }
            "disable-next-line" => {
                let next = line_num.saturating_add(1);
                for tag in tags {
                    map.add(tag, next, next);
                }
            }
            _ => {}
        }
    }

    for (tag, start) in open {
        map.add(tag, start, u32::MAX);
    }

    tracing::debug!(codes = map.suppressed.len(), "parsed suppression directives");
    map
}
