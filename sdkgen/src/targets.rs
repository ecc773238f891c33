//! Target dispatch.
//!
//! Maps configured targets to their renderers, in render order.

use std::path::PathBuf;

use sdkgen_codegen::language::LanguageCodegen;
use sdkgen_codegen_rust::{Generator as RustGenerator, RustOptions};
use sdkgen_codegen_typescript::{Generator as TypeScriptGenerator, TypeScriptOptions};
use sdkgen_ir::RootNode;

use crate::config::{Config, RustTarget, TypeScriptTarget};

/// One configured client.
#[derive(Debug, Clone, Copy)]
pub enum Target<'c> {
    TypeScript(&'c TypeScriptTarget),
    Rust(&'c RustTarget),
}

impl<'c> Target<'c> {
    /// Configured targets: TypeScript first, then Rust.
    pub fn all(config: &'c Config) -> Vec<Self> {
        let typescript = config.typescript.as_ref().map(Target::TypeScript);
        let rust = config.rust.as_ref().map(Target::Rust);
        typescript.into_iter().chain(rust).collect()
    }

    pub fn language(&self) -> &'static str {
        match self {
            Target::TypeScript(_) => "typescript",
            Target::Rust(_) => "rust",
        }
    }

    /// Output directory, resolved against the config file.
    pub fn output(&self, config: &Config) -> PathBuf {
        match self {
            Target::TypeScript(t) => config.resolve(&t.output),
            Target::Rust(t) => config.resolve(&t.output),
        }
    }

    pub fn delete_folder_before_rendering(&self) -> bool {
        match self {
            Target::TypeScript(t) => t.delete_folder_before_rendering,
            Target::Rust(t) => t.delete_folder_before_rendering,
        }
    }

    /// Create the renderer for this target.
    pub fn generator<'r>(&self, root: &'r RootNode, config: &Config) -> Box<dyn LanguageCodegen + 'r> {
        match self {
            Target::TypeScript(t) => Box::new(TypeScriptGenerator::with_options(
                root,
                TypeScriptOptions {
                    render: t.render_options(),
                    package_folder: t.package_folder.as_deref().map(|p| config.resolve(p)),
                },
            )),
            Target::Rust(t) => Box::new(RustGenerator::with_options(
                root,
                RustOptions {
                    render: t.render_options(),
                    crate_folder: t.crate_folder.as_deref().map(|p| config.resolve(p)),
                    module_path: t.module_path.clone(),
                },
            )),
        }
    }
}
