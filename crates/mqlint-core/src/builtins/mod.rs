//! Static allow-lists consulted by the checkers.
//!
//! The tables are process-wide constants built on first use. Checkers reach
//! them through [`BuiltinTables`], which picks the function set for the
//! document's dialect.

pub mod functions;
pub mod keywords;
pub mod preprocessor;

use crate::dialect::Dialect;

pub use preprocessor::is_valid_property;

/// Dialect-aware view over the builtin tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTables {
    dialect: Dialect,
}

impl BuiltinTables {
    /// Tables for one dialect.
    pub const fn for_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// The dialect these tables were selected for.
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Keyword, predefined constant or standard-library name.
    pub fn is_keyword(&self, word: &str) -> bool {
        keywords::KEYWORDS.contains(word)
    }

    /// Builtin function of this dialect.
    pub fn is_builtin_function(&self, word: &str) -> bool {
        functions::COMMON_FUNCTIONS.contains(word)
            || match self.dialect {
                Dialect::Mql4 => functions::MQL4_FUNCTIONS.contains(word),
                Dialect::Mql5 => functions::MQL5_FUNCTIONS.contains(word),
            }
    }

    /// Either a keyword or a builtin function.
    pub fn is_known(&self, word: &str) -> bool {
        self.is_keyword(word) || self.is_builtin_function(word)
    }

    /// Word that cannot be used as a declared name.
    pub fn is_reserved(&self, word: &str) -> bool {
        keywords::RESERVED_KEYWORDS.contains(word)
    }

    /// Header boilerplate that is never reported as undefined.
    pub fn is_suppressed(&self, word: &str) -> bool {
        keywords::SUPPRESSED_WORDS.contains(word)
    }

    /// Known preprocessor directive name.
    pub fn is_directive(&self, name: &str) -> bool {
        preprocessor::VALID_DIRECTIVES.contains(name)
    }
}

impl Default for BuiltinTables {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}
