//! Diagnostic data model.
//!
//! Positions follow editor conventions: zero-based lines and columns
//! measured in UTF-16 code units.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LintError;

/// A zero-based position in a document.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column in UTF-16 code units.
    pub character: u32,
}

impl Position {
    /// Create a position.
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A half-open span between two positions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Create a range from two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A range on a single line between two columns.
    pub const fn on_line(line: u32, start: u32, end: u32) -> Self {
        Self {
            start: Position::new(line, start),
            end: Position::new(line, end),
        }
    }

    /// A zero-width range.
    pub const fn point(line: u32, character: u32) -> Self {
        Self::on_line(line, character, character)
    }
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Code that will not compile or is certainly wrong.
    Error,
    /// Likely mistakes.
    Warning,
    /// Style suggestions.
    Information,
}

impl Severity {
    /// Returns the severity as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which checker family produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Line-level syntax heuristics.
    Syntax,
    /// Symbol and type heuristics.
    Semantic,
    /// Best-practice suggestions.
    Style,
}

impl Category {
    /// Returns the category as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Semantic => "semantic",
            Self::Style => "style",
        }
    }
}

/// Stable tag identifying the rule behind a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    /// Statement line without a terminating semicolon.
    MissingSemicolon,
    /// Closing bracket with nothing open.
    UnmatchedBracket,
    /// Closing bracket that does not match the innermost open one.
    MismatchedBracket,
    /// Bracket still open at end of document.
    UnclosedBracket,
    /// Function declared with a malformed name.
    InvalidFunctionName,
    /// Reserved word used as a variable name.
    ReservedKeyword,
    /// Unknown `#directive`.
    InvalidPreprocessor,
    /// Unknown `#property` key.
    InvalidPropertyValue,
    /// Identifier used without a declaration.
    UndefinedVariable,
    /// Call to a function that is neither builtin nor declared.
    UndefinedFunction,
    /// Literal assigned to an incompatible declared type.
    TypeMismatch,
    /// Statement following a `return`.
    UnreachableCode,
    /// Declaration never referenced again.
    UnusedVariable,
    /// Multi-digit numeric literal.
    MagicNumber,
    /// Function body longer than the threshold.
    LongFunction,
    /// Braces nested deeper than the threshold.
    DeepNesting,
}

impl DiagnosticCode {
    /// Every code in pipeline order.
    pub const ALL: &'static [Self] = &[
        Self::MissingSemicolon,
        Self::UnmatchedBracket,
        Self::MismatchedBracket,
        Self::UnclosedBracket,
        Self::InvalidFunctionName,
        Self::ReservedKeyword,
        Self::InvalidPreprocessor,
        Self::InvalidPropertyValue,
        Self::UndefinedVariable,
        Self::UndefinedFunction,
        Self::TypeMismatch,
        Self::UnreachableCode,
        Self::UnusedVariable,
        Self::MagicNumber,
        Self::LongFunction,
        Self::DeepNesting,
    ];

    /// Returns the kebab-case tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingSemicolon => "missing-semicolon",
            Self::UnmatchedBracket => "unmatched-bracket",
            Self::MismatchedBracket => "mismatched-bracket",
            Self::UnclosedBracket => "unclosed-bracket",
            Self::InvalidFunctionName => "invalid-function-name",
            Self::ReservedKeyword => "reserved-keyword",
            Self::InvalidPreprocessor => "invalid-preprocessor",
            Self::InvalidPropertyValue => "invalid-property-value",
            Self::UndefinedVariable => "undefined-variable",
            Self::UndefinedFunction => "undefined-function",
            Self::TypeMismatch => "type-mismatch",
            Self::UnreachableCode => "unreachable-code",
            Self::UnusedVariable => "unused-variable",
            Self::MagicNumber => "magic-number",
            Self::LongFunction => "long-function",
            Self::DeepNesting => "deep-nesting",
        }
    }

    /// The checker family this code belongs to.
    pub const fn category(&self) -> Category {
        match self {
            Self::MissingSemicolon
            | Self::UnmatchedBracket
            | Self::MismatchedBracket
            | Self::UnclosedBracket
            | Self::InvalidFunctionName
            | Self::ReservedKeyword
            | Self::InvalidPreprocessor
            | Self::InvalidPropertyValue => Category::Syntax,
            Self::UndefinedVariable
            | Self::UndefinedFunction
            | Self::TypeMismatch
            | Self::UnreachableCode => Category::Semantic,
            Self::UnusedVariable | Self::MagicNumber | Self::LongFunction | Self::DeepNesting => {
                Category::Style
            }
        }
    }

    /// Severity used unless a checker overrides it.
    ///
    /// `type-mismatch` is reported as an error for string literals assigned
    /// to numeric types and as a warning otherwise.
    pub const fn default_severity(&self) -> Severity {
        match self {
            Self::MissingSemicolon
            | Self::UnmatchedBracket
            | Self::MismatchedBracket
            | Self::UnclosedBracket
            | Self::InvalidFunctionName
            | Self::ReservedKeyword
            | Self::InvalidPreprocessor => Severity::Error,
            Self::InvalidPropertyValue
            | Self::UndefinedVariable
            | Self::UndefinedFunction
            | Self::TypeMismatch
            | Self::UnreachableCode => Severity::Warning,
            Self::UnusedVariable | Self::MagicNumber | Self::LongFunction | Self::DeepNesting => {
                Severity::Information
            }
        }
    }

    fn available() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosticCode {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| LintError::UnknownCode {
                name: wanted.to_string(),
                available: Self::available(),
            })
    }
}

/// A positioned finding produced by one checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    /// Where the issue is.
    pub range: Range,
    /// Human-readable description.
    pub message: String,
    /// How serious it is.
    pub severity: Severity,
    /// Which rule produced it.
    pub code: DiagnosticCode,
}

impl Diagnostic {
    /// Create a diagnostic with the code's default severity.
    pub fn new(code: DiagnosticCode, range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
            severity: code.default_severity(),
            code,
        }
    }

    /// Override the severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}
