//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods prefixed with `push_` for use inside loops.
///
/// # Example
///
/// ```
/// use sdkgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::rust()
///     .line("fn main() {")
///     .indent()
///     .line("println!(\"Hello, world!\");")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "fn main() {\n    println!(\"Hello, world!\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    // =========================================================================
    // Mutable API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line, collapsing runs of blank lines into one.
    pub fn push_blank(&mut self) -> &mut Self {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add `///` doc lines. Empty docs emit nothing.
    pub fn push_rust_doc(&mut self, lines: &[String]) -> &mut Self {
        for line in lines {
            if line.is_empty() {
                self.push_line("///");
            } else {
                self.push_line(&format!("/// {}", line));
            }
        }
        self
    }

    /// Add a JSDoc comment. One line renders inline, more as a block.
    pub fn push_jsdoc(&mut self, lines: &[String]) -> &mut Self {
        match lines {
            [] => {}
            [line] => {
                self.push_line(&format!("/** {} */", line));
            }
            _ => {
                self.push_line("/**");
                for line in lines {
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line));
                    }
                }
                self.push_line(" */");
            }
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::RustDoc(lines) => {
                self.push_rust_doc(&lines);
            }
            CodeFragment::JsDoc(lines) => {
                self.push_jsdoc(&lines);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    pub fn block<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    pub fn emit_node(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.indent.write_to(&mut self.buffer);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::rust().line("let x = 1;").build();
        assert_eq!(code, "let x = 1;\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::rust()
            .block("impl Foo {", "}", |b| b.line("fn bar(&self) {}"))
            .build();

        assert_eq!(code, "impl Foo {\n    fn bar(&self) {}\n}\n");
    }

    #[test]
    fn test_blank_lines_collapse() {
        let code = CodeBuilder::rust()
            .blank()
            .line("use std::io;")
            .blank()
            .blank()
            .line("fn main() {}")
            .build();

        assert_eq!(code, "use std::io;\n\nfn main() {}\n");
    }

    #[test]
    fn test_rust_doc() {
        let docs = vec!["First line".to_string(), String::new(), "Third".to_string()];
        let mut builder = CodeBuilder::rust();
        builder.push_rust_doc(&docs).push_line("struct Foo;");
        assert_eq!(builder.build(), "/// First line\n///\n/// Third\nstruct Foo;\n");
    }

    #[test]
    fn test_jsdoc_single_and_multi() {
        let mut builder = CodeBuilder::typescript();
        builder.push_jsdoc(&["One".to_string()]);
        builder.push_jsdoc(&["A".to_string(), "B".to_string()]);
        builder.push_jsdoc(&[]);
        assert_eq!(builder.build(), "/** One */\n/**\n * A\n * B\n */\n");
    }

    #[test]
    fn test_each_and_when() {
        let code = CodeBuilder::rust()
            .when(true, |b| b.line("#[derive(Debug)]"))
            .when(false, |b| b.line("#[derive(Clone)]"))
            .block("enum Mode {", "}", |b| {
                b.each(["Allow", "Deny"], |b, v| b.line(&format!("{},", v)))
            })
            .build();

        assert_eq!(code, "#[derive(Debug)]\nenum Mode {\n    Allow,\n    Deny,\n}\n");
    }

    #[test]
    fn test_typescript_indent() {
        let code = CodeBuilder::typescript()
            .block("function foo() {", "}", |b| b.line("return 1;"))
            .build();

        assert_eq!(code, "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_emit_nested_block_fragment() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "mod a {",
                    vec![CodeFragment::block("fn b() {", vec![CodeFragment::line("c();")])],
                )]
            }
        }

        let mut builder = CodeBuilder::rust();
        builder.emit(&Node);
        assert_eq!(
            builder.build(),
            "mod a {\n    fn b() {\n        c();\n    }\n}\n"
        );
    }
}
