//! Structural validation of a parsed IDL.
//!
//! Every check here is fatal: a document that fails any of them cannot be
//! rendered into a client that compiles. Style problems (missing docs,
//! naming) are lints in the codegen pipeline instead.

use std::collections::HashMap;

use miette::SourceSpan;

use crate::{
    Idl, IdlField, IdlType, IdlTypeDefKind, Result,
    error::SourceContext,
};

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Validate that a name is usable as an identifier in every target language.
/// Returns None if valid, Some(reason) if invalid.
///
/// Keywords are allowed; renderers escape them (`r#type`).
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if name.chars().all(|c| c == '_') {
        return Some("name must contain at least one letter");
    }

    None
}

/// Check that a string looks like a base58-encoded 32-byte public key.
pub fn is_valid_address(address: &str) -> bool {
    (32..=44).contains(&address.len()) && address.chars().all(|c| BASE58_ALPHABET.contains(c))
}

/// Validate a parsed IDL against its source text.
pub(crate) fn validate_idl(idl: &Idl, source: &SourceContext) -> Result<()> {
    let ctx = ValidateContext::new(source);

    ctx.validate_name(&idl.name, "program", 0)?;
    if !is_valid_address(&idl.address) {
        return Err(source.invalid_address_error(
            &idl.address,
            "program",
            ctx.find_string(0, "address", &idl.address, 0),
        ));
    }

    ctx.validate_instructions(idl)?;
    ctx.validate_accounts(idl)?;
    ctx.validate_types(idl)?;
    ctx.validate_errors(idl)?;
    ctx.validate_references(idl)?;

    tracing::debug!(
        program = %idl.name,
        instructions = idl.instructions.len(),
        accounts = idl.accounts.len(),
        types = idl.types.len(),
        errors = idl.errors.len(),
        "validated IDL"
    );
    Ok(())
}

/// Validation context that carries the source for span lookup.
struct ValidateContext<'a> {
    source: &'a SourceContext,
}

impl<'a> ValidateContext<'a> {
    fn new(source: &'a SourceContext) -> Self {
        Self { source }
    }

    fn src(&self) -> &str {
        self.source.src()
    }

    /// Byte offset of a top-level key, used to anchor searches for items of
    /// that section.
    fn section(&self, key: &str) -> usize {
        top_level_key_offset(self.src(), key).unwrap_or(0)
    }

    fn find_string(&self, from: usize, key: &str, value: &str, nth: usize) -> Option<SourceSpan> {
        find_value_span(self.src(), from, key, value, true, nth)
    }

    fn find_number(&self, from: usize, key: &str, value: u64, nth: usize) -> Option<SourceSpan> {
        find_value_span(self.src(), from, key, &value.to_string(), false, nth)
    }

    fn validate_name(&self, name: &str, kind: &str, from: usize) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                kind,
                reason,
                self.find_string(from, "name", name, 0),
            ));
        }
        Ok(())
    }

    /// Check names for validity and uniqueness within one scope.
    ///
    /// `scope` is appended to messages, e.g. ` in account 'config'`.
    fn validate_names<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
        kind: &str,
        scope: &str,
        from: usize,
    ) -> Result<()> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for name in names {
            self.validate_name(name, &format!("{}{}", kind, scope), from)?;
            let count = seen.entry(name).or_insert(0);
            if *count > 0 {
                return Err(self.source.duplicate_error(
                    format!("{} name", kind),
                    name,
                    scope,
                    self.find_string(from, "name", name, 0),
                    self.find_string(from, "name", name, *count),
                ));
            }
            *count += 1;
        }
        Ok(())
    }

    /// Start of an item's name within a section, anchoring nested lookups.
    fn item_anchor(&self, section: usize, name: &str) -> usize {
        self.find_string(section, "name", name, 0)
            .map(|span| span.offset())
            .unwrap_or(section)
    }

    fn validate_instructions(&self, idl: &Idl) -> Result<()> {
        let section = self.section("instructions");
        self.validate_names(
            idl.instructions.iter().map(|ix| ix.name.as_str()),
            "instruction",
            "",
            section,
        )?;

        let mut discriminators: HashMap<u8, usize> = HashMap::new();
        for ix in &idl.instructions {
            let count = discriminators.entry(ix.discriminator).or_insert(0);
            if *count > 0 {
                let value = u64::from(ix.discriminator);
                return Err(self.source.duplicate_error(
                    "instruction discriminator",
                    value.to_string(),
                    "",
                    self.find_number(section, "discriminator", value, 0),
                    self.find_number(section, "discriminator", value, *count),
                ));
            }
            *count += 1;
        }

        for ix in &idl.instructions {
            let anchor = self.item_anchor(section, &ix.name);
            let scope = format!(" in instruction '{}'", ix.name);
            self.validate_names(ix.accounts.iter().map(|a| a.name.as_str()), "account", &scope, anchor)?;

            for account in &ix.accounts {
                let Some(address) = &account.address else {
                    continue;
                };
                if !is_valid_address(address) {
                    return Err(self.source.invalid_address_error(
                        address,
                        format!("account '{}' in instruction '{}'", account.name, ix.name),
                        self.find_string(anchor, "address", address, 0),
                    ));
                }
            }

            self.validate_fields(&ix.args, "argument", &scope, anchor)?;
        }
        Ok(())
    }

    fn validate_accounts(&self, idl: &Idl) -> Result<()> {
        let section = self.section("accounts");
        self.validate_names(idl.accounts.iter().map(|a| a.name.as_str()), "account", "", section)?;

        let mut discriminators: HashMap<u8, usize> = HashMap::new();
        for account in &idl.accounts {
            let Some(discriminator) = account.discriminator else {
                continue;
            };
            let count = discriminators.entry(discriminator).or_insert(0);
            if *count > 0 {
                let value = u64::from(discriminator);
                return Err(self.source.duplicate_error(
                    "account discriminator",
                    value.to_string(),
                    "",
                    self.find_number(section, "discriminator", value, 0),
                    self.find_number(section, "discriminator", value, *count),
                ));
            }
            *count += 1;
        }

        for account in &idl.accounts {
            let anchor = self.item_anchor(section, &account.name);
            let scope = format!(" in account '{}'", account.name);
            self.validate_fields(&account.fields, "field", &scope, anchor)?;
        }
        Ok(())
    }

    fn validate_types(&self, idl: &Idl) -> Result<()> {
        let section = self.section("types");
        self.validate_names(idl.types.iter().map(|t| t.name.as_str()), "type", "", section)?;

        for def in &idl.types {
            let anchor = self.item_anchor(section, &def.name);
            let scope = format!(" in type '{}'", def.name);
            match &def.kind {
                IdlTypeDefKind::Struct { fields } => {
                    self.validate_fields(fields, "field", &scope, anchor)?;
                }
                IdlTypeDefKind::Enum { variants } => {
                    if variants.is_empty() {
                        return Err(self.source.validation_error(
                            format!("enum '{}' has no variants", def.name),
                            self.find_string(section, "name", &def.name, 0),
                        ));
                    }
                    if variants.len() > 256 {
                        return Err(self.source.validation_error(
                            format!("enum '{}' has more than 256 variants", def.name),
                            self.find_string(section, "name", &def.name, 0),
                        ));
                    }
                    self.validate_names(
                        variants.iter().map(|v| v.name.as_str()),
                        "variant",
                        &scope,
                        anchor,
                    )?;
                }
            }
        }
        Ok(())
    }

    fn validate_errors(&self, idl: &Idl) -> Result<()> {
        let section = self.section("errors");
        self.validate_names(idl.errors.iter().map(|e| e.name.as_str()), "error", "", section)?;

        let mut codes: HashMap<u32, usize> = HashMap::new();
        for error in &idl.errors {
            let count = codes.entry(error.code).or_insert(0);
            if *count > 0 {
                let value = u64::from(error.code);
                return Err(self.source.duplicate_error(
                    "error code",
                    value.to_string(),
                    "",
                    self.find_number(section, "code", value, 0),
                    self.find_number(section, "code", value, *count),
                ));
            }
            *count += 1;
        }
        Ok(())
    }

    fn validate_fields(
        &self,
        fields: &[IdlField],
        kind: &str,
        scope: &str,
        from: usize,
    ) -> Result<()> {
        self.validate_names(fields.iter().map(|f| f.name.as_str()), kind, scope, from)?;
        for field in fields {
            self.validate_type_shape(&field.ty, &field.name, from)?;
        }
        Ok(())
    }

    fn validate_type_shape(&self, ty: &IdlType, field: &str, from: usize) -> Result<()> {
        match ty {
            IdlType::Primitive(_) | IdlType::Defined { .. } => Ok(()),
            IdlType::Option { option: inner } | IdlType::Vec { vec: inner } => {
                self.validate_type_shape(inner, field, from)
            }
            IdlType::Array { array: (inner, len) } => {
                if *len == 0 {
                    return Err(self.source.validation_error(
                        format!("array field '{}' must have a length greater than zero", field),
                        self.find_string(from, "name", field, 0),
                    ));
                }
                self.validate_type_shape(inner, field, from)
            }
        }
    }

    /// Every `defined` reference must name an entry of `types`.
    fn validate_references(&self, idl: &Idl) -> Result<()> {
        let fields = idl
            .instructions
            .iter()
            .flat_map(|ix| ix.args.iter().map(move |f| (format!("instruction '{}'", ix.name), f)))
            .chain(idl.accounts.iter().flat_map(|account| {
                account
                    .fields
                    .iter()
                    .map(move |f| (format!("account '{}'", account.name), f))
            }))
            .chain(idl.types.iter().flat_map(|def| {
                let fields: &[IdlField] = match &def.kind {
                    IdlTypeDefKind::Struct { fields } => fields,
                    IdlTypeDefKind::Enum { .. } => &[],
                };
                fields.iter().map(move |f| (format!("type '{}'", def.name), f))
            }));

        for (owner, field) in fields {
            let Some(name) = field.ty.defined_name() else {
                continue;
            };
            if idl.find_type(name).is_none() {
                return Err(self.source.undefined_type_error(
                    name,
                    format!("field '{}' of {}", field.name, owner),
                    self.find_string(0, "defined", name, 0),
                ));
            }
        }
        Ok(())
    }
}

/// Find the span of the `nth` value of `"key": value` at or after `from`.
///
/// String values are matched inside their quotes and the span excludes them.
fn find_value_span(
    src: &str,
    from: usize,
    key: &str,
    value: &str,
    quoted: bool,
    nth: usize,
) -> Option<SourceSpan> {
    let key_pattern = format!("\"{}\"", key);
    let mut cursor = from.min(src.len());
    let mut seen = 0;

    while let Some(pos) = src[cursor..].find(&key_pattern) {
        let after_key = cursor + pos + key_pattern.len();
        cursor = after_key;

        let Some(rest) = src[after_key..].trim_start().strip_prefix(':') else {
            continue;
        };
        let rest = rest.trim_start();
        let value_start = src.len() - rest.len();

        let matched = if quoted {
            rest.strip_prefix('"')
                .and_then(|r| r.strip_prefix(value))
                .is_some_and(|r| r.starts_with('"'))
        } else {
            rest.strip_prefix(value)
                .is_some_and(|r| !r.starts_with(|c: char| c.is_ascii_digit()))
        };

        if matched {
            if seen == nth {
                let start = if quoted { value_start + 1 } else { value_start };
                return Some(SourceSpan::from((start, value.len())));
            }
            seen += 1;
        }
    }

    None
}

/// Byte offset of a key of the outermost JSON object.
fn top_level_key_offset(src: &str, key: &str) -> Option<usize> {
    let bytes = src.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'[' => depth += 1,
            b'}' | b']' => depth = depth.saturating_sub(1),
            b'"' => {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
                let end = i.min(bytes.len());
                if depth == 1 && &src[start + 1..end] == key {
                    let is_key = src[(end + 1).min(src.len())..].trim_start().starts_with(':');
                    if is_key {
                        return Some(start);
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}
