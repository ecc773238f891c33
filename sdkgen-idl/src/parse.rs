//! IDL parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, Idl, Result, error::SourceContext, validate::validate_idl};

impl FromStr for Idl {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_idl(s, "idl.json")
    }
}

impl Idl {
    /// Read, parse and validate an IDL file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_idl(&content, &path.display().to_string())
    }

    /// Parse an IDL from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_idl(content, filename)
    }
}

/// Parse and validate an IDL from content with the given filename for error reporting.
pub fn parse_idl(content: &str, filename: &str) -> Result<Idl> {
    let source_ctx = SourceContext::new(content, filename);
    let idl: Idl = serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_idl(&idl, &source_ctx)?;
    Ok(idl)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "ABL1111111111111111111111111111111111111111";

    fn idl_with(body: &str) -> String {
        format!(
            r#"{{"name": "abl", "address": "{}"{}{}}}"#,
            ADDRESS,
            if body.is_empty() { "" } else { ", " },
            body
        )
    }

    #[test]
    fn test_minimal() {
        let idl: Idl = idl_with("").parse().unwrap();
        assert_eq!(idl.name, "abl");
        assert_eq!(idl.address, ADDRESS);
    }

    #[test]
    fn test_full_document() {
        let src = idl_with(
            r#"
            "instructions": [
                {
                    "name": "createList",
                    "discriminator": 1,
                    "docs": ["Create a new list"],
                    "accounts": [
                        { "name": "authority", "writable": true, "signer": true },
                        { "name": "systemProgram", "address": "11111111111111111111111111111111" }
                    ],
                    "args": [{ "name": "mode", "type": { "defined": "mode" } }]
                }
            ],
            "accounts": [
                { "name": "listConfig", "discriminator": 1,
                  "fields": [{ "name": "authority", "type": "publicKey" }] }
            ],
            "types": [
                { "name": "mode", "type": { "kind": "enum", "variants": [{ "name": "allow" }, { "name": "deny" }] } }
            ],
            "errors": [{ "code": 0, "name": "invalidInstruction", "message": "Invalid instruction" }]
            "#,
        );
        let idl: Idl = src.parse().unwrap();
        assert_eq!(idl.instructions[0].accounts.len(), 2);
        assert!(idl.instructions[0].accounts[0].signer);
        assert!(!idl.instructions[0].accounts[1].writable);
        assert_eq!(idl.accounts[0].discriminator, Some(1));
        assert_eq!(idl.errors[0].message.as_deref(), Some("Invalid instruction"));
    }

    #[test]
    fn test_malformed_json() {
        let err = Idl::from_str_with_filename("{\"name\": ", "broken.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Idl::from_file("/nonexistent/idl.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_invalid_address() {
        let err = r#"{"name": "abl", "address": "not-an-address"}"#
            .parse::<Idl>()
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidAddress { span: Some(_), .. }));
    }

    #[test]
    fn test_invalid_program_name() {
        let src = format!(r#"{{"name": "my-program", "address": "{}"}}"#, ADDRESS);
        let err = src.parse::<Idl>().unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { span: Some(_), .. }));
        assert_eq!(err.to_string(), "invalid name 'my-program' for program");
    }

    #[test]
    fn test_duplicate_instruction_name() {
        let src = idl_with(
            r#""instructions": [
                {"name": "close", "discriminator": 1},
                {"name": "close", "discriminator": 2}
            ]"#,
        );
        let err = src.parse::<Idl>().unwrap_err();
        match *err {
            Error::Duplicate {
                kind,
                name,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(kind, "instruction name");
                assert_eq!(name, "close");
                let (first, second) = (first_span.unwrap(), second_span.unwrap());
                assert!(second.offset() > first.offset());
                assert_eq!(&src[first.offset()..first.offset() + first.len()], "close");
                assert_eq!(&src[second.offset()..second.offset() + second.len()], "close");
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_discriminator() {
        let src = idl_with(
            r#""instructions": [
                {"name": "open", "discriminator": 3},
                {"name": "close", "discriminator": 3}
            ]"#,
        );
        let err = src.parse::<Idl>().unwrap_err();
        assert!(matches!(*err, Error::Duplicate { ref kind, .. } if kind == "instruction discriminator"));
    }

    #[test]
    fn test_duplicate_error_code() {
        let src = idl_with(
            r#""errors": [
                {"code": 6000, "name": "a"},
                {"code": 6000, "name": "b"}
            ]"#,
        );
        let err = src.parse::<Idl>().unwrap_err();
        match *err {
            Error::Duplicate { kind, second_span, .. } => {
                assert_eq!(kind, "error code");
                let span = second_span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "6000");
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_field_in_account() {
        let src = idl_with(
            r#""accounts": [
                {"name": "config", "fields": [
                    {"name": "owner", "type": "publicKey"},
                    {"name": "owner", "type": "u8"}
                ]}
            ]"#,
        );
        let err = src.parse::<Idl>().unwrap_err();
        assert_eq!(err.to_string(), "duplicate field name 'owner' in account 'config'");
    }

    #[test]
    fn test_undefined_type() {
        let src = idl_with(
            r#""accounts": [
                {"name": "config", "fields": [{"name": "mode", "type": {"option": {"defined": "mode"}}}]}
            ]"#,
        );
        let err = src.parse::<Idl>().unwrap_err();
        match *err {
            Error::UndefinedType { name, used_by, span, .. } => {
                assert_eq!(name, "mode");
                assert_eq!(used_by, "field 'mode' of account 'config'");
                assert!(span.is_some());
            }
            other => panic!("expected undefined type error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_fixed_account_address() {
        let src = idl_with(
            r#""instructions": [
                {"name": "init", "discriminator": 0,
                 "accounts": [{"name": "systemProgram", "address": "nope"}]}
            ]"#,
        );
        let err = src.parse::<Idl>().unwrap_err();
        assert!(matches!(*err, Error::InvalidAddress { ref context, .. } if context.contains("systemProgram")));
    }

    #[test]
    fn test_empty_enum_rejected() {
        let src = idl_with(r#""types": [{"name": "mode", "type": {"kind": "enum", "variants": []}}]"#);
        let err = src.parse::<Idl>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_zero_length_array_rejected() {
        let src = idl_with(
            r#""types": [{"name": "seeds", "type": {"kind": "struct",
                "fields": [{"name": "bump", "type": {"array": ["u8", 0]}}]}}]"#,
        );
        let err = src.parse::<Idl>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
