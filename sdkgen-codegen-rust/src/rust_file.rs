//! RustFile abstraction for structured Rust file generation.
//!
//! Provides a high-level API for generating Rust files with
//! organized imports and body content.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use sdkgen_core::GENERATED_HEADER;

/// A Rust use statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    /// Create a use statement for a module.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    /// Add a symbol to import from the module.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Add multiple symbols to import.
    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            symbols => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        }
    }

    fn is_local(&self) -> bool {
        self.module.starts_with("crate::")
            || self.module.starts_with("self::")
            || self.module.starts_with("super::")
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// A structured representation of a Rust file.
///
/// External imports come first, then `crate::` imports, then the body
/// items separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let file = RustFile::new()
///     .use_stmt(Use::new("borsh").symbols(["BorshDeserialize", "BorshSerialize"]))
///     .add(my_struct)
///     .add(my_impl)
///     .render();
/// ```
#[derive(Default)]
pub struct RustFile {
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file without a header.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();

        let (local, external): (Vec<&Use>, Vec<&Use>) =
            self.uses.iter().partition(|u| u.is_local());
        for group in [external, local] {
            if group.is_empty() {
                continue;
            }
            builder.push_blank();
            for use_stmt in group {
                builder.emit(use_stmt);
            }
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Render the file below the generated-code header.
    pub fn render_with_header(&self) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", GENERATED_HEADER)
        } else {
            format!("{}\n\n{}", GENERATED_HEADER, content)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.uses.is_empty() && self.body.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = RustFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
        assert_eq!(file.render_with_header(), format!("{}\n", GENERATED_HEADER));
    }

    #[test]
    fn test_use_formats() {
        assert_eq!(Use::new("std::io").format(), "use std::io;");
        assert_eq!(
            Use::new("solana_program::pubkey").symbol("Pubkey").format(),
            "use solana_program::pubkey::Pubkey;"
        );
        assert_eq!(
            Use::new("borsh")
                .symbols(["BorshDeserialize", "BorshSerialize"])
                .format(),
            "use borsh::{BorshDeserialize, BorshSerialize};"
        );
    }

    #[test]
    fn test_local_imports_grouped_last() {
        let file = RustFile::new()
            .use_stmt(Use::new("crate::generated::types").symbol("Mode"))
            .use_stmt(Use::new("borsh").symbol("BorshSerialize"))
            .add(RawCode::new("pub struct A;"))
            .add(RawCode::lines(["pub struct B;", "", "pub struct C;"]));

        assert_eq!(
            file.render(),
            "use borsh::BorshSerialize;\n\nuse crate::generated::types::Mode;\n\n\
             pub struct A;\n\npub struct B;\n\npub struct C;\n"
        );
    }
}
