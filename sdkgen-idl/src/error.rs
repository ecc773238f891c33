use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for IDL operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Bundles the raw IDL text with its filename so the error factories below
/// do not have to be handed both on every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    ///
    /// serde_json reports 1-based line/column; miette wants a byte offset.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid address error.
    pub fn invalid_address_error(
        &self,
        address: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidAddress {
            src: self.named_source(),
            span,
            address: address.into(),
            context: context.into(),
        })
    }

    /// Create a duplicate definition error.
    pub fn duplicate_error(
        &self,
        kind: impl Into<String>,
        name: impl Into<String>,
        scope: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            first_span,
            second_span,
            kind: kind.into(),
            name: name.into(),
            scope: scope.into(),
        })
    }

    /// Create an undefined type reference error.
    pub fn undefined_type_error(
        &self,
        name: impl Into<String>,
        used_by: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UndefinedType {
            src: self.named_source(),
            span,
            name: name.into(),
            used_by: used_by.into(),
        })
    }
}

/// Convert a 1-based (line, column) pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(text.len());
            return Some((offset + col).min(src.len().saturating_sub(1)));
        }
        offset += text.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read IDL '{path}'")]
    #[diagnostic(
        code(sdkgen::io_error),
        help("set `idl` in sdkgen.toml to the path of the program's IDL file")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse IDL")]
    #[diagnostic(code(sdkgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(sdkgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid name '{name}' for {context}")]
    #[diagnostic(
        code(sdkgen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid {context} address '{address}'")]
    #[diagnostic(
        code(sdkgen::invalid_address),
        help("addresses are base58-encoded 32-byte public keys (32 to 44 characters)")
    )]
    InvalidAddress {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a base58 public key")]
        span: Option<SourceSpan>,
        address: String,
        context: String,
    },

    #[error("duplicate {kind} '{name}'{scope}")]
    #[diagnostic(code(sdkgen::duplicate), help("rename or renumber one of the definitions"))]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        kind: String,
        name: String,
        scope: String,
    },

    #[error("unknown type '{name}' referenced by {used_by}")]
    #[diagnostic(
        code(sdkgen::undefined_type),
        help("add a `{name}` entry to the IDL's `types` list")
    )]
    UndefinedType {
        #[source_code]
        src: NamedSource<String>,
        #[label("not defined")]
        span: Option<SourceSpan>,
        name: String,
        used_by: String,
    },
}
