//! TypeScript const declaration builder.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// `export const NAME = value;`
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    docs: Vec<String>,
    ty: Option<String>,
    value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            ty: None,
            value: value.into(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.docs.push(doc.into());
        self
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let annotation = self
            .ty
            .as_ref()
            .map(|ty| format!(": {}", ty))
            .unwrap_or_default();
        vec![
            CodeFragment::jsdoc(&self.docs),
            CodeFragment::Line(format!(
                "export const {}{} = {};",
                self.name, annotation, self.value
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const() {
        assert_eq!(
            Const::new("CREATE_LIST_DISCRIMINATOR", "1").build(),
            "export const CREATE_LIST_DISCRIMINATOR = 1;\n"
        );
    }

    #[test]
    fn test_const_with_type_and_doc() {
        assert_eq!(
            Const::new("ABL_ERROR__INVALID_MINT", "0x9")
                .ty("number")
                .doc("InvalidMint: Invalid mint")
                .build(),
            "/** InvalidMint: Invalid mint */\nexport const ABL_ERROR__INVALID_MINT: number = 0x9;\n"
        );
    }
}
