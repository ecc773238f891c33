//! TypeScript function builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn format(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {}", self.name, optional, self.ty)
    }
}

/// Builder for exported TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    docs: Vec<String>,
    is_async: bool,
    generics: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            is_async: false,
            generics: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.docs.push(doc.into());
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a fragment to the body, e.g. a nested block.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn signature(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };
        let generics = self
            .generics
            .as_ref()
            .map(|g| format!("<{}>", g))
            .unwrap_or_default();
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");
        match &self.return_type {
            Some(ret) => format!(
                "export {}function {}{}({}): {} {{",
                async_kw, self.name, generics, params, ret
            ),
            None => format!(
                "export {}function {}{}({}) {{",
                async_kw, self.name, generics, params
            ),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::jsdoc(&self.docs),
            CodeFragment::block(self.signature(), self.body.clone()),
        ]
    }
}
