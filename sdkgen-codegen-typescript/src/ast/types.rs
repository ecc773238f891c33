//! TypeScript object type and type alias builders.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a TypeScript object type.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub docs: Vec<String>,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            docs: Vec::new(),
            optional: false,
        }
    }

    pub fn docs(mut self, docs: &[String]) -> Self {
        self.docs = docs.to_vec();
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let optional = if self.optional { "?" } else { "" };
        vec![
            CodeFragment::jsdoc(&self.docs),
            CodeFragment::Line(format!("{}{}: {};", self.name, optional, self.ty)),
        ]
    }
}

/// Builder for TypeScript object types (`export type Foo = { ... };`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    generics: Option<String>,
    docs: Vec<String>,
    fields: Vec<Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: None,
            docs: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn docs(mut self, docs: &[String]) -> Self {
        self.docs = docs.to_vec();
        self
    }

    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
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

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let generics = self
            .generics
            .as_ref()
            .map(|g| format!("<{}>", g))
            .unwrap_or_default();
        let mut fragments = vec![CodeFragment::jsdoc(&self.docs)];

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "export type {}{} = {{}};",
                self.name, generics
            )));
        } else {
            fragments.push(CodeFragment::block_with_close(
                format!("export type {}{} = {{", self.name, generics),
                self.fields.iter().flat_map(Field::to_fragments).collect(),
                "};",
            ));
        }

        fragments
    }
}

/// Builder for TypeScript type aliases (`export type Foo = Bar;`).
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    docs: Vec<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            ty: ty.into(),
        }
    }

    pub fn docs(mut self, docs: &[String]) -> Self {
        self.docs = docs.to_vec();
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::jsdoc(&self.docs),
            CodeFragment::Line(format!("export type {} = {};", self.name, self.ty)),
        ]
    }
}
