//! Core library for mqlint.
//!
//! Heuristic diagnostics for MQL4 and MQL5 source text. Nothing here
//! parses the language: every check is a line or regex scan over
//! comment-blanked views of the document, so results are best-effort.
//!
//! # Modules
//!
//! - [`engine`] - Runs every checker and caps the result
//! - [`checks`] - Syntax, semantic and style checkers
//! - [`store`] - Revision-guarded publishing of results
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use mqlint_core::{Dialect, RunConfiguration, update_diagnostics};
//!
//! let diagnostics = update_diagnostics("int x = 5", Dialect::Mql5, &RunConfiguration::default());
//! assert_eq!(diagnostics[0].code.as_str(), "missing-semicolon");
//! ```
#![deny(unsafe_code)]

pub mod builtins;
pub mod checks;
pub mod config;
pub mod diagnostic;
pub mod dialect;
pub mod directives;
pub mod engine;
pub mod error;
pub mod lexical;
pub mod store;
pub mod symbols;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use diagnostic::{Category, Diagnostic, DiagnosticCode, Position, Range, Severity};
pub use dialect::Dialect;
pub use engine::{CheckReport, DEFAULT_MAX_PROBLEMS, RunConfiguration, check_document, update_diagnostics};
pub use error::{ConfigError, ConfigResult, LintError, LintResult};
pub use store::{DiagnosticStore, DocumentId, PublishOutcome, Published, check_and_publish};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
