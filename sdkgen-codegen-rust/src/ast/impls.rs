//! Rust impl block builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    trait_name: Option<String>,
    generics: Option<String>,
    items: Vec<Vec<CodeFragment>>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            trait_name: None,
            generics: None,
            items: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    /// Generic parameters, e.g. `'a` for `impl<'a> ...`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.items.push(method.to_fragments());
        self
    }

    /// Add a raw item line, e.g. an associated const or type.
    pub fn item(mut self, line: impl Into<String>) -> Self {
        self.items.push(vec![CodeFragment::Line(line.into())]);
        self
    }

    fn header(&self) -> String {
        let generics = self
            .generics
            .as_ref()
            .map(|g| format!("<{}>", g))
            .unwrap_or_default();
        match &self.trait_name {
            Some(trait_name) => {
                format!("impl{} {} for {} {{", generics, trait_name, self.type_name)
            }
            None => format!("impl{} {} {{", generics, self.type_name),
        }
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        let mut previous_was_line = false;
        for item in &self.items {
            let is_line = matches!(item.as_slice(), [CodeFragment::Line(_)]);
            // consecutive single-line items (consts) stay together
            if !body.is_empty() && !(is_line && previous_was_line) {
                body.push(CodeFragment::Blank);
            }
            body.extend(item.iter().cloned());
            previous_was_line = is_line;
        }
        vec![CodeFragment::block(self.header(), body)]
    }
}
