use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Header placed at the top of every generated source file.
///
/// Uses `//` so the same line is a valid comment in Rust and TypeScript.
pub const GENERATED_HEADER: &str =
    "// This file was generated by sdkgen from the program IDL. Do not edit it by hand.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render()).write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact content, nothing was touched
    Unchanged,
}

/// A file to be written, with an absolute (or caller-relative) path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, skipping the write when the content on disk is identical.
    pub fn write(&self) -> Result<WriteResult> {
        let existing = std::fs::read_to_string(&self.path).ok();
        if existing.as_deref() == Some(self.content.as_str()) {
            tracing::trace!(path = %self.path.display(), "unchanged");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &self.content)?;
        tracing::debug!(path = %self.path.display(), bytes = self.content.len(), "wrote file");
        Ok(WriteResult::Written)
    }
}
