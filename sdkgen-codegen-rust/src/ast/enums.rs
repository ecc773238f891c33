//! Rust enum builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A unit variant in a Rust enum.
#[derive(Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub docs: Vec<String>,
    /// Explicit discriminant, e.g. `= 0x3`
    pub value: Option<String>,
    pub attrs: Vec<String>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            value: None,
            attrs: Vec::new(),
        }
    }

    pub fn docs(mut self, docs: &[String]) -> Self {
        self.docs = docs.to_vec();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Add an attribute to the variant, e.g. `error("Invalid data")`.
    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::rust_doc(&self.docs)];
        for attr in &self.attrs {
            fragments.push(CodeFragment::line(format!("#[{}]", attr)));
        }
        let line = match &self.value {
            Some(value) => format!("{} = {},", self.name, value),
            None => format!("{},", self.name),
        };
        fragments.push(CodeFragment::Line(line));
        fragments
    }
}

/// Builder for Rust enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    docs: Vec<String>,
    derives: Vec<String>,
    attrs: Vec<String>,
    variants: Vec<Variant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            derives: Vec::new(),
            attrs: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn docs(mut self, docs: &[String]) -> Self {
        self.docs = docs.to_vec();
        self
    }

    pub fn derives(mut self, derives: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.derives.extend(derives.into_iter().map(Into::into));
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::rust_doc(&self.docs)];

        if let Some(derive) = super::derive_line(&self.derives) {
            fragments.push(CodeFragment::Line(derive));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        if self.variants.is_empty() {
            fragments.push(CodeFragment::Line(format!("pub enum {} {{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("pub enum {} {{", self.name),
                self.variants.iter().flat_map(Variant::to_fragments).collect(),
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_enum() {
        assert_eq!(Enum::new("Empty").build(), "pub enum Empty {}\n");
    }

    #[test]
    fn test_enum_with_variants() {
        let e = Enum::new("Mode")
            .derives(["Clone", "Copy"])
            .variant(Variant::new("Allow"))
            .variant(Variant::new("Block"))
            .build();
        assert_eq!(
            e,
            "#[derive(Clone, Copy)]\npub enum Mode {\n    Allow,\n    Block,\n}\n"
        );
    }

    #[test]
    fn test_error_variant() {
        let e = Enum::new("AblError")
            .variant(
                Variant::new("InvalidData")
                    .docs(&["12 - Invalid data".to_string()])
                    .attr("error(\"Invalid data\")")
                    .value("0xc"),
            )
            .build();
        assert!(e.contains("    /// 12 - Invalid data\n    #[error(\"Invalid data\")]\n    InvalidData = 0xc,\n"));
    }
}
