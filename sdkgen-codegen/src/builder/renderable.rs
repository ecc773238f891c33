//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes in the renderer crates produce fragments; only
//! [`CodeBuilder`](super::CodeBuilder) turns them into text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// Doc comment lines, rendered as `///` in Rust.
    RustDoc(Vec<String>),
    /// Doc comment lines, rendered as a `/** */` block in TypeScript.
    JsDoc(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    /// Block closed by `}`.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }

    /// Block with a custom closing line, e.g. `});`.
    pub fn block_with_close(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    pub fn rust_doc(lines: &[String]) -> Self {
        Self::RustDoc(lines.to_vec())
    }

    pub fn jsdoc(lines: &[String]) -> Self {
        Self::JsDoc(lines.to_vec())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_closes_with_brace() {
        match CodeFragment::block("if (ok) {", vec![CodeFragment::line("return 1;")]) {
            CodeFragment::Block { header, body, close } => {
                assert_eq!(header, "if (ok) {");
                assert_eq!(body.len(), 1);
                assert_eq!(close.as_deref(), Some("}"));
            }
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_vec_renderable_concatenates() {
        struct One(&'static str);
        impl Renderable for One {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::line(self.0)]
            }
        }

        let fragments = vec![One("a"), One("b")].to_fragments();
        assert_eq!(fragments, [CodeFragment::line("a"), CodeFragment::line("b")]);
    }
}
