//! Error types for mqlint-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while preparing a lint run.
///
/// The checking pipeline itself never fails; these cover the inputs
/// handed to it by callers.
#[derive(Error, Debug)]
pub enum LintError {
    /// An unknown diagnostic code was named in configuration or on the command line.
    #[error("unknown diagnostic code: {name}. Use: {available}")]
    UnknownCode {
        /// The code that was requested.
        name: String,
        /// Comma-separated list of known codes.
        available: String,
    },

    /// An unknown dialect name was given.
    #[error("unknown dialect: {name}. Use: mql4, mql5")]
    UnknownDialect {
        /// The dialect name that was requested.
        name: String,
    },
}

/// Result type alias using [`LintError`].
pub type LintResult<T> = Result<T, LintError>;
