//! Diagnostic aggregation.
//!
//! [`update_diagnostics`] runs the checker families in a fixed order
//! (syntax, semantic, style), drops suppressed and disabled codes, and caps
//! the list at [`RunConfiguration::max_problems`]. The result for identical
//! input is always identical, in content and order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::checks::{self, CheckContext};
use crate::diagnostic::{Diagnostic, DiagnosticCode, Severity};
use crate::dialect::Dialect;
use crate::directives;

/// Default cap on the number of diagnostics per document.
pub const DEFAULT_MAX_PROBLEMS: usize = 100;

/// Per-invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RunConfiguration {
    /// Most diagnostics returned for one document.
    pub max_problems: usize,
    /// Codes never reported.
    pub disabled_codes: Vec<DiagnosticCode>,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            max_problems: DEFAULT_MAX_PROBLEMS,
            disabled_codes: Vec::new(),
        }
    }
}

impl RunConfiguration {
    /// Replace the diagnostic cap.
    #[must_use]
    pub const fn with_max_problems(mut self, max_problems: usize) -> Self {
        self.max_problems = max_problems;
        self
    }

    /// Add codes to the disabled list.
    #[must_use]
    pub fn with_disabled(mut self, codes: impl IntoIterator<Item = DiagnosticCode>) -> Self {
        for code in codes {
            if !self.disabled_codes.contains(&code) {
                self.disabled_codes.push(code);
            }
        }
        self
    }
}

/// Outcome of checking one document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    /// Where the text came from, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Dialect the document was checked as.
    pub dialect: Dialect,
    /// Diagnostics after suppression and truncation.
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics found before truncation.
    pub total_found: usize,
    /// `true` when the cap dropped diagnostics.
    pub truncated: bool,
    /// Error-severity diagnostics reported.
    pub errors: usize,
    /// Warning-severity diagnostics reported.
    pub warnings: usize,
    /// Information-severity diagnostics reported.
    pub information: usize,
    /// `true` when no error was reported.
    pub pass: bool,
}

impl CheckReport {
    /// Attach the source path or URI.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Compute the diagnostics for one document.
pub fn update_diagnostics(text: &str, dialect: Dialect, config: &RunConfiguration) -> Vec<Diagnostic> {
    check_document(text, dialect, config).diagnostics
}

/// Compute the diagnostics for one document, with totals.
#[tracing::instrument(skip(text, config), fields(text_len = text.len(), %dialect))]
pub fn check_document(text: &str, dialect: Dialect, config: &RunConfiguration) -> CheckReport {
    let ctx = CheckContext::new(text, dialect);

    let mut diagnostics = checks::syntax(&ctx);
    diagnostics.extend(checks::semantic(&ctx));
    diagnostics.extend(checks::style(&ctx));

    directives::parse_suppressions(text).apply(&mut diagnostics);
    if !config.disabled_codes.is_empty() {
        diagnostics.retain(|d| !config.disabled_codes.contains(&d.code));
    }

    let total_found = diagnostics.len();
    let truncated = total_found > config.max_problems;
    if truncated {
        tracing::info!(
            found = total_found,
            kept = config.max_problems,
            "truncating diagnostics"
        );
        diagnostics.truncate(config.max_problems);
    }

    let count = |severity: Severity| diagnostics.iter().filter(|d| d.severity == severity).count();
    let errors = count(Severity::Error);
    let warnings = count(Severity::Warning);
    let information = count(Severity::Information);

    tracing::debug!(total_found, errors, warnings, information, "document checked");

    CheckReport {
        file: None,
        dialect,
        diagnostics,
        total_found,
        truncated,
        errors,
        warnings,
        information,
        pass: errors == 0,
    }
}
