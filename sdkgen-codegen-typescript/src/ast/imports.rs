//! TypeScript import builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript import statements.
///
/// Named imports keep their insertion order; a `type ` prefix marks a
/// type-only specifier (`import { type Address } from "@solana/kit"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn format(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        if self.named.is_empty() {
            format!("import \"{}\";", self.from)
        } else {
            format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            )
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}
