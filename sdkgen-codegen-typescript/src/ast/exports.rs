//! TypeScript export builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript re-exports, as used by `index.ts` barrels.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
    named: Vec<String>,
}

impl Export {
    /// `export * from "<module>";`
    pub fn all(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Re-export a named item instead of everything.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    fn format(&self) -> String {
        if self.named.is_empty() {
            format!("export * from \"{}\";", self.from)
        } else {
            format!("export {{ {} }} from \"{}\";", self.named.join(", "), self.from)
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}
