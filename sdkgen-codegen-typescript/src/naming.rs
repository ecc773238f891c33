//! TypeScript naming conventions.

use sdkgen_core::{to_camel_case, to_pascal_case, to_screaming_snake_case};

const RESERVED_WORDS: &[&str] = &[
    // JavaScript reserved words
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // TypeScript reserved words
    "any",
    "as",
    "async",
    "await",
    "boolean",
    "constructor",
    "declare",
    "get",
    "implements",
    "interface",
    "module",
    "namespace",
    "never",
    "number",
    "object",
    "package",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "set",
    "static",
    "string",
    "symbol",
    "type",
    "undefined",
    "unknown",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

pub fn safe_name(name: &str) -> String {
    if is_reserved(name) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// Types and enum members: `listConfig` → `ListConfig`.
pub fn type_name(name: &str) -> String {
    safe_name(&to_pascal_case(name))
}

/// Fields, parameters and file stems: `wallets_count` → `walletsCount`.
pub fn field_name(name: &str) -> String {
    safe_name(&to_camel_case(name))
}

/// Constants: `listConfig` → `LIST_CONFIG`.
pub fn const_name(name: &str) -> String {
    to_screaming_snake_case(name)
}
