//! Staged generation.
//!
//! Renderers write into a fresh temporary directory; [`StagingArea::commit`]
//! then merges only the generated files into the real target. Protected
//! files that already exist are never overwritten or deleted, so no backup
//! or restore step is needed.

use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use tempfile::TempDir;
use walkdir::WalkDir;

use super::PreserveError;

/// Files that a merge must leave alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protection {
    dir: PathBuf,
    files: Vec<String>,
}

impl Protection {
    pub fn new(dir: impl Into<PathBuf>, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            dir: dir.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Nothing is protected.
    pub fn none() -> Self {
        Self {
            dir: PathBuf::new(),
            files: Vec::new(),
        }
    }

    /// Returns true if `path` is one of the protected files.
    pub fn protects(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.files
            .iter()
            .any(|name| normalize(&self.dir.join(name)) == path)
    }

    /// Returns true if the protected files live in `dir` or below it, so
    /// removing `dir` would remove them too.
    pub fn is_within(&self, dir: &Path) -> bool {
        !self.files.is_empty() && normalize(&self.dir).starts_with(normalize(dir))
    }
}

/// Lexically normalize a path: drop `.` and resolve `..` where possible.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// What [`StagingArea::commit`] did to the target directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Files copied into the target
    pub written: Vec<PathBuf>,
    /// Files already identical in the target
    pub unchanged: Vec<PathBuf>,
    /// Protected files left as they were
    pub kept: Vec<PathBuf>,
    /// Stale files removed from the target
    pub removed: Vec<PathBuf>,
}

/// A temporary directory renderers write into before the merge.
///
/// The directory is removed when the area is dropped, committed or not.
#[derive(Debug)]
pub struct StagingArea {
    dir: TempDir,
}

impl StagingArea {
    pub fn new() -> Result<Self, PreserveError> {
        let dir = tempfile::Builder::new()
            .prefix("sdkgen-stage-")
            .tempdir()
            .map_err(|source| PreserveError::Staging {
                path: std::env::temp_dir(),
                source,
            })?;
        tracing::debug!(dir = %dir.path().display(), "created staging area");
        Ok(Self { dir })
    }

    /// Create the staging directory inside `parent`, typically the parent
    /// of the target.
    ///
    /// Formatters run over the staged files look up their config upward
    /// from the file, so staging next to the target picks up the project's
    /// `rustfmt.toml` or `.prettierrc`.
    pub fn new_in(parent: &Path) -> Result<Self, PreserveError> {
        let staging_err = |source| PreserveError::Staging {
            path: parent.to_path_buf(),
            source,
        };
        std::fs::create_dir_all(parent).map_err(staging_err)?;
        let dir = tempfile::Builder::new()
            .prefix(".sdkgen-stage-")
            .tempdir_in(parent)
            .map_err(staging_err)?;
        tracing::debug!(dir = %dir.path().display(), "created staging area");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Merge the staged tree into `target`.
    ///
    /// With `clean_target`, files in `target` that were not staged are
    /// removed, the same end state as deleting the folder before rendering,
    /// except that protected files survive.
    pub fn commit(
        self,
        target: &Path,
        protection: &Protection,
        clean_target: bool,
    ) -> Result<MergeReport, PreserveError> {
        let mut report = MergeReport::default();
        let staged = self.staged_files()?;

        if clean_target && target.exists() {
            let keep: HashSet<&Path> = staged.iter().map(PathBuf::as_path).collect();
            remove_stale(target, &keep, protection, &mut report)?;
        }

        for relative in &staged {
            let staged_path = self.path().join(relative);
            let dest = target.join(relative);

            if protection.protects(&dest) && dest.exists() {
                tracing::debug!(path = %dest.display(), "protected, not overwriting");
                report.kept.push(dest);
                continue;
            }

            let staging_err = |source| PreserveError::Staging {
                path: dest.clone(),
                source,
            };
            let content = std::fs::read(&staged_path).map_err(staging_err)?;
            if std::fs::read(&dest).ok().as_deref() == Some(content.as_slice()) {
                report.unchanged.push(dest);
                continue;
            }
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).map_err(staging_err)?;
            }
            std::fs::write(&dest, &content).map_err(staging_err)?;
            report.written.push(dest);
        }

        tracing::info!(
            target = %target.display(),
            written = report.written.len(),
            unchanged = report.unchanged.len(),
            kept = report.kept.len(),
            removed = report.removed.len(),
            "merged staged files"
        );
        Ok(report)
    }

    /// Staged files, relative to the staging directory, in walk order.
    fn staged_files(&self) -> Result<Vec<PathBuf>, PreserveError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(self.path()).sort_by_file_name() {
            let entry = entry.map_err(|source| PreserveError::Walk {
                path: self.path().to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(self.path()) {
                files.push(relative.to_path_buf());
            }
        }
        Ok(files)
    }
}

/// Remove files under `target` that are neither staged nor protected, then
/// any directories left empty.
fn remove_stale(
    target: &Path,
    keep: &HashSet<&Path>,
    protection: &Protection,
    report: &mut MergeReport,
) -> Result<(), PreserveError> {
    for entry in WalkDir::new(target).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|source| PreserveError::Walk {
            path: target.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let staging_err = |source| PreserveError::Staging {
            path: path.to_path_buf(),
            source,
        };

        if entry.file_type().is_dir() {
            let is_empty = std::fs::read_dir(path)
                .map_err(staging_err)?
                .next()
                .is_none();
            if is_empty {
                std::fs::remove_dir(path).map_err(staging_err)?;
            }
            continue;
        }

        let relative = path.strip_prefix(target).unwrap_or(path);
        if keep.contains(relative) || protection.protects(path) {
            continue;
        }
        std::fs::remove_file(path).map_err(staging_err)?;
        tracing::debug!(path = %path.display(), "removed stale file");
        report.removed.push(path.to_path_buf());
    }
    Ok(())
}
