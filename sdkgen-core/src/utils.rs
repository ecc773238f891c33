//! Case conversion helpers.
//!
//! IDL names arrive in camelCase (`createList`, `allowAllEoas`); the
//! renderers need every other spelling of them.

/// Split a name into lowercase words.
///
/// Word boundaries are `_`, `-`, a lower-to-upper transition, and the last
/// capital of an acronym run followed by lowercase (`ABLError` → `abl`, `error`).
fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "createList" -> "CreateList")
pub fn to_pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "create_list" -> "createList")
pub fn to_camel_case(s: &str) -> String {
    let words = words(s);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Convert a string to snake_case (e.g., "createList" -> "create_list")
pub fn to_snake_case(s: &str) -> String {
    words(s).join("_")
}

/// Convert a string to kebab-case (e.g., "createList" -> "create-list")
pub fn to_kebab_case(s: &str) -> String {
    words(s).join("-")
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "createList" -> "CREATE_LIST")
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}
