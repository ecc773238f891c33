//! Rust struct builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub docs: Vec<String>,
    pub attrs: Vec<String>,
    pub is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            docs: Vec::new(),
            attrs: Vec::new(),
            is_public: true,
        }
    }

    pub fn docs(mut self, docs: &[String]) -> Self {
        self.docs = docs.to_vec();
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments = vec![CodeFragment::rust_doc(&self.docs)];
        for attr in &self.attrs {
            fragments.push(CodeFragment::line(format!("#[{}]", attr)));
        }
        fragments.push(CodeFragment::line(format!("{}{}: {},", vis, self.name, self.ty)));
        fragments
    }
}

/// Builder for Rust structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    docs: Vec<String>,
    derives: Vec<String>,
    attrs: Vec<String>,
    fields: Vec<Field>,
    is_public: bool,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            derives: Vec::new(),
            attrs: Vec::new(),
            fields: Vec::new(),
            is_public: true,
        }
    }

    pub fn docs(mut self, docs: &[String]) -> Self {
        self.docs = docs.to_vec();
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
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

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments = vec![CodeFragment::rust_doc(&self.docs)];

        if let Some(derive) = super::derive_line(&self.derives) {
            fragments.push(CodeFragment::Line(derive));
        }

        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("{}struct {} {{}}", vis, self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("{}struct {} {{", vis, self.name),
                self.fields.iter().flat_map(Field::to_fragments).collect(),
            ));
        }

        fragments
    }
}
