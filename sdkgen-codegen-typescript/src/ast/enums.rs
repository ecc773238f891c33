//! TypeScript enum builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// `export enum Name { A, B = 2 }`
#[derive(Debug, Clone)]
pub struct TsEnum {
    name: String,
    docs: Vec<String>,
    members: Vec<(String, Option<String>)>,
}

impl TsEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn docs(mut self, docs: &[String]) -> Self {
        self.docs = docs.to_vec();
        self
    }

    /// A member numbered implicitly.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push((name.into(), None));
        self
    }

    pub fn member_with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((name.into(), Some(value.into())));
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TsEnum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let members = self
            .members
            .iter()
            .map(|(name, value)| match value {
                Some(value) => CodeFragment::Line(format!("{} = {},", name, value)),
                None => CodeFragment::Line(format!("{},", name)),
            })
            .collect();
        vec![
            CodeFragment::jsdoc(&self.docs),
            CodeFragment::block(format!("export enum {} {{", self.name), members),
        ]
    }
}
