//! Rust naming conventions.

use sdkgen_core::{to_pascal_case, to_screaming_snake_case, to_snake_case};

const RESERVED_WORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers.
const NOT_RAW: &[&str] = &["crate", "self", "Self", "super"];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Make `name` usable as an identifier: `type` → `r#type`, `self` → `self_`.
pub fn safe_name(name: &str) -> String {
    if NOT_RAW.contains(&name) {
        format!("{}_", name)
    } else if is_reserved(name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Struct, enum and variant names: `listConfig` → `ListConfig`.
pub fn type_name(name: &str) -> String {
    safe_name(&to_pascal_case(name))
}

/// Fields, arguments and modules: `walletsCount` → `wallets_count`.
pub fn field_name(name: &str) -> String {
    safe_name(&to_snake_case(name))
}

/// Constants: `abl` → `ABL`.
pub fn const_name(name: &str) -> String {
    to_screaming_snake_case(name)
}

/// File stem for a module: `type` stays `type.rs` (declared as `mod r#type`).
pub fn file_name(name: &str) -> String {
    let module = field_name(name);
    match module.strip_prefix("r#") {
        Some(stem) => stem.to_string(),
        None => module,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name() {
        assert_eq!(type_name("listConfig"), "ListConfig");
        assert_eq!(type_name("allowAllEoas"), "AllowAllEoas");
        // PascalCase of `self` is `Self`
        assert_eq!(type_name("self"), "Self_");
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("walletsCount"), "wallets_count");
        assert_eq!(field_name("type"), "r#type");
        assert_eq!(field_name("crate"), "crate_");
        assert_eq!(field_name("owner"), "owner");
    }

    #[test]
    fn test_const_name() {
        assert_eq!(const_name("abl"), "ABL");
        assert_eq!(const_name("allowBlockList"), "ALLOW_BLOCK_LIST");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("type"), "type");
        assert_eq!(file_name("self"), "self_");
        assert_eq!(file_name("canThawPermissionless"), "can_thaw_permissionless");
    }
}
