use std::path::{Path, PathBuf};

use crate::{Error, Idl, Result};

/// An IDL file on disk with both raw content and the parsed document.
#[derive(Debug)]
pub struct IdlFile {
    path: PathBuf,
    content: String,
    idl: Idl,
}

impl IdlFile {
    /// Open, parse and validate an IDL file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let idl = Idl::from_str_with_filename(&content, &filename)?;
        tracing::debug!(path = %path.display(), program = %idl.name, "loaded IDL");

        Ok(Self { path, content, idl })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed IDL.
    pub fn idl(&self) -> &Idl {
        &self.idl
    }

    /// Consume the file, keeping only the parsed IDL.
    pub fn into_idl(self) -> Idl {
        self.idl
    }
}
