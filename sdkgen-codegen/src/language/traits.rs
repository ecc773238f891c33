//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;
use sdkgen_core::File;

use crate::output::FormatOutcome;

/// Trait for language-specific renderers.
///
/// A renderer walks a [`RootNode`](sdkgen_ir::RootNode) and produces one
/// source tree. Implement this trait to add a new client language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust", "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rs", "ts")
    fn file_extension(&self) -> &'static str;

    /// Options this renderer was configured with
    fn render_options(&self) -> &RenderOptions;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// Package manifest to create or update next to the generated tree.
    ///
    /// Returns `None` when the renderer has no package folder or the
    /// manifest on disk already has everything the generated code needs.
    fn package_manifest(&self) -> Result<Option<File>> {
        Ok(None)
    }
}

/// Options shared by every renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Run the language formatter over written files
    pub format_code: bool,
    /// Remove the output directory before writing
    pub delete_folder_before_rendering: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format_code: true,
            delete_folder_before_rendering: true,
        }
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the output directory
    pub written: Vec<String>,
    /// Files whose content on disk was already identical
    pub unchanged: Vec<String>,
    /// Whether a previous output directory was removed first
    pub cleaned: bool,
    pub format: FormatOutcome,
}

impl GenerateResult {
    /// Total number of files in the generated tree.
    pub fn file_count(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory, `/`-separated
    pub path: String,
    /// File content
    pub content: String,
}

impl PreviewFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
