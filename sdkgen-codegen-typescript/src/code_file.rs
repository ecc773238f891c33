//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with
//! organized imports, body content, and exports sections.

use std::collections::{BTreeMap, BTreeSet};

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};
use sdkgen_core::GENERATED_HEADER;

use crate::ast::{Export, Import};

/// The package every generated file builds on.
pub const KIT: &str = "@solana/kit";

/// Imports collected while rendering a file, deduplicated per module.
#[derive(Debug, Default, Clone)]
pub struct ImportMap {
    modules: BTreeMap<String, ModuleImports>,
}

#[derive(Debug, Default, Clone)]
struct ModuleImports {
    values: BTreeSet<String>,
    types: BTreeSet<String>,
}

impl ImportMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, module: &str, name: impl Into<String>) -> &mut Self {
        self.module(module).values.insert(name.into());
        self
    }

    pub fn add_type(&mut self, module: &str, name: impl Into<String>) -> &mut Self {
        self.module(module).types.insert(name.into());
        self
    }

    /// Shorthand for value imports from `@solana/kit`.
    pub fn kit<'s>(&mut self, names: impl IntoIterator<Item = &'s str>) -> &mut Self {
        for name in names {
            self.add(KIT, name);
        }
        self
    }

    /// Shorthand for type imports from `@solana/kit`.
    pub fn kit_types<'s>(&mut self, names: impl IntoIterator<Item = &'s str>) -> &mut Self {
        for name in names {
            self.add_type(KIT, name);
        }
        self
    }

    fn module(&mut self, module: &str) -> &mut ModuleImports {
        self.modules.entry(module.to_string()).or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// One import per module: packages first, then relative paths.
    pub fn to_imports(&self) -> Vec<Import> {
        let (relative, packages): (Vec<_>, Vec<_>) = self
            .modules
            .iter()
            .partition(|(module, _)| module.starts_with('.'));

        packages
            .into_iter()
            .chain(relative)
            .map(|(module, names)| {
                Import::new(module)
                    .names(names.values.iter().cloned())
                    .names(names.types.iter().map(|t| format!("type {}", t)))
            })
            .collect()
    }
}

/// A structured representation of a TypeScript file.
///
/// Organizes code into three sections: imports, body, and exports.
/// Each section is rendered in order with appropriate blank lines.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .imports(imports.to_imports())
///     .add(Const::new("CREATE_LIST_DISCRIMINATOR", "1"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
        self.exports.extend(exports);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);

        for import in &self.imports {
            builder.emit(import);
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.exports.is_empty() {
            builder.push_blank();
        }
        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }

    /// Render the file below the generated-code header.
    pub fn render_with_header(&self) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", GENERATED_HEADER)
        } else {
            format!("{}\n\n{}", GENERATED_HEADER, content)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty() && self.exports.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}
