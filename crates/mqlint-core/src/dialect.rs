//! Source dialects.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LintError;

/// MetaTrader scripting language dialect.
///
/// The dialects share syntax and differ mainly in which builtin
/// functions exist, so the dialect only selects builtin tables.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Dialect {
    /// MQL4 (MetaTrader 4).
    Mql4,
    /// MQL5 (MetaTrader 5).
    #[default]
    Mql5,
}

impl Dialect {
    /// Returns the dialect as its lowercase tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mql4 => "mql4",
            Self::Mql5 => "mql5",
        }
    }

    /// Infer the dialect from a file extension.
    ///
    /// Only `mq4` and `mq5` identify a dialect; headers (`mqh`) are shared.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mq4" => Some(Self::Mql4),
            "mq5" => Some(Self::Mql5),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mql4" | "mq4" => Ok(Self::Mql4),
            "mql5" | "mq5" => Ok(Self::Mql5),
            _ => Err(LintError::UnknownDialect {
                name: s.to_string(),
            }),
        }
    }
}
