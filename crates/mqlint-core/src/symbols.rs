//! Symbol extraction.
//!
//! Declarations are found with a family of regexes over the literal-free
//! view of the document. The result is a flat table keyed by name: there is
//! no notion of scope, so a name declared twice keeps only its last
//! position.

use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::diagnostic::Position;
use crate::text::Document;

/// Builtin scalar type names.
pub const SCALAR_TYPES: &str =
    "int|double|string|bool|datetime|color|char|short|long|uchar|ushort|uint|ulong|float";

/// Builtin structure type names.
pub const STRUCT_TYPES: &str =
    "MqlDateTime|MqlRates|MqlTick|MqlTradeRequest|MqlTradeResult|MqlTradeTransaction";

/// `[modifiers] type name`, including parameters and class members.
static TYPED_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:(?:public|private|protected|input|sinput|extern|static|const)\s+)*(?:{SCALAR_TYPES}|{STRUCT_TYPES})(?:\s*[&*]\s*|\s+)([a-zA-Z_][a-zA-Z0-9_]*)\b"
    ))
    .expect("valid regex")
});

/// `ClassName name`, covering objects and enum-typed inputs.
static OBJECT_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z0-9_]*(?:\s*[&*]\s*|\s+)([a-zA-Z_][a-zA-Z0-9_]*)\b").expect("valid regex")
});

/// `#define NAME`
static MACRO_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*#\s*define\s+([a-zA-Z_][a-zA-Z0-9_]*)").expect("valid regex")
});

/// `class NAME`, `struct NAME`, `enum NAME`
static TYPE_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:class|struct|enum|interface)\s+([a-zA-Z_][a-zA-Z0-9_]*)")
        .expect("valid regex")
});

/// `type name(` and `type Class::name(`
static FUNCTION_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:void|{SCALAR_TYPES}|{STRUCT_TYPES}|[A-Z][a-zA-Z0-9_]*)(?:\s*[&*]\s*|\s+)(?:[a-zA-Z_][a-zA-Z0-9_]*::)?([a-zA-Z_][a-zA-Z0-9_]*)\s*\("
    ))
    .expect("valid regex")
});

/// `Class::Class(` and `Class::~Class(`
static METHOD_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z_][a-zA-Z0-9_]*::~?([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").expect("valid regex")
});

/// Returns `true` if the line holding `offset` is a preprocessor line.
fn on_directive_line(text: &str, offset: usize) -> bool {
    let start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    text[start..].trim_start().starts_with('#')
}

/// Names declared in one document.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    /// Declared variables in first-seen order, mapped to their last position.
    pub variables: IndexMap<String, Position>,
    /// Declared function names.
    pub functions: HashSet<String>,
}

impl SymbolTable {
    /// Extract declarations from a document.
    #[tracing::instrument(skip_all)]
    pub fn extract(doc: &Document<'_>) -> Self {
        let text = doc.bare_text();
        let mut table = Self::default();

        // The flag says whether a match may sit on a preprocessor line:
        // `#define LIMIT value` names the macro, not an object `value`.
        for (pattern, on_directives) in [
            (&*TYPED_DECLARATION, false),
            (&*OBJECT_DECLARATION, false),
            (&*MACRO_DEFINITION, true),
            (&*TYPE_DEFINITION, false),
        ] {
            for caps in pattern.captures_iter(text) {
                let Some(name) = caps.get(1) else { continue };
                if !on_directives && on_directive_line(text, name.start()) {
                    continue;
                }
                table
                    .variables
                    .insert(name.as_str().to_string(), doc.position_at(name.start()));
            }
        }

        for pattern in [&*FUNCTION_DECLARATION, &*METHOD_DEFINITION] {
            for caps in pattern.captures_iter(text) {
                if let Some(name) = caps.get(1)
                    && !on_directive_line(text, name.start())
                {
                    table.functions.insert(name.as_str().to_string());
                }
            }
        }

        tracing::debug!(
            variables = table.variables.len(),
            functions = table.functions.len(),
            "extracted symbols"
        );
        table
    }

    /// Returns `true` if `name` was declared as a variable or function.
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name) || self.functions.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> SymbolTable {
        SymbolTable::extract(&Document::new(text))
    }

    #[test]
    fn typed_and_modified_declarations() {
        let table = extract(
            "input int Period = 14;\nstatic double last;\nsinput string Label;\nconst bool on = true;",
        );
        for name in ["Period", "last", "Label", "on"] {
            assert!(table.variables.contains_key(name), "{name} missing");
        }
    }

    #[test]
    fn class_members_objects_and_arrays() {
        let table = extract("class Foo {\n  private: int count;\n  public double price;\n};\nCTrade trade;\ndouble buf[];");
        for name in ["Foo", "count", "price", "trade", "buf"] {
            assert!(table.variables.contains_key(name), "{name} missing");
        }
    }

    #[test]
    fn parameters_are_variables() {
        let table = extract("double Scale(double value, int &factor) { return value; }");
        assert!(table.variables.contains_key("value"));
        assert!(table.variables.contains_key("factor"));
        assert!(table.functions.contains("Scale"));
    }

    #[test]
    fn functions_and_methods() {
        let table = extract("void OnTick() {}\nCFoo *Make();\nvoid CFoo::Run() {}\nCFoo::CFoo() {}");
        for name in ["OnTick", "Make", "Run", "CFoo"] {
            assert!(table.functions.contains(name), "{name} missing");
        }
    }

    #[test]
    fn macros_and_enums() {
        let table = extract("#define MAGIC 1234\nenum Mode { FAST, SLOW };");
        assert!(table.variables.contains_key("MAGIC"));
        assert!(table.variables.contains_key("Mode"));
    }

    #[test]
    fn macro_bodies_declare_nothing() {
        let table = extract("#define LIMIT Threshold value\n#define SIZE int count\n");
        assert!(table.variables.contains_key("LIMIT"));
        assert!(table.variables.contains_key("SIZE"));
        for name in ["Threshold", "value", "count"] {
            assert!(!table.variables.contains_key(name), "{name} declared");
        }
    }

    #[test]
    fn redeclaration_keeps_last_position() {
        let table = extract("int x;\nvoid f() {\n  int x;\n}");
        assert_eq!(table.variables.get("x"), Some(&Position::new(2, 6)));
        assert_eq!(table.variables.get_index_of("x"), Some(0));
    }

    #[test]
    fn comments_and_strings_declare_nothing() {
        let table = extract("// int hidden;\nstring s = \"int fake\";");
        assert!(!table.variables.contains_key("hidden"));
        assert!(!table.variables.contains_key("fake"));
        assert!(table.variables.contains_key("s"));
    }
}
