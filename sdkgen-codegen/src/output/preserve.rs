//! Config file preservation around generation.
//!
//! Generation writes into directories that also hold hand-maintained files
//! (package manifests, compiler configs, lockfiles). [`ConfigPreserver`]
//! copies a fixed list of those files to `<name>.temp` siblings before
//! generation and copies them back afterwards.
//!
//! Restore is not transactional. [`PreserveGuard`] restores on drop so an
//! error or panic between begin and restore still puts the files back, and
//! [`ConfigPreserver::recover`] picks up backups left by a killed process.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Suffix appended to a protected file's name for its backup copy.
pub const BACKUP_SUFFIX: &str = ".temp";

#[derive(Debug, Error)]
pub enum PreserveError {
    #[error("failed to back up '{}' to '{}'", path.display(), backup.display())]
    Backup {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to restore '{}' from '{}'", path.display(), backup.display())]
    Restore {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove backup '{}'", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to stage generated files in '{}'", path.display())]
    Staging {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk '{}'", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Protects a fixed list of file names inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPreserver {
    dir: PathBuf,
    files: Vec<String>,
}

impl ConfigPreserver {
    pub fn new(dir: impl Into<PathBuf>, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            dir: dir.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Where the backup of `name` lives while generation runs.
    pub fn backup_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}{}", name, BACKUP_SUFFIX))
    }

    /// Back up every protected file that currently exists.
    ///
    /// Absent files are skipped. If a copy fails, backups already made are
    /// removed before the error is returned; originals are never modified
    /// here.
    pub fn begin(&self) -> Result<PreservationSet, PreserveError> {
        let mut set = PreservationSet::default();

        for name in &self.files {
            let original = self.dir.join(name);
            if !original.exists() {
                tracing::trace!(file = %name, "not present, nothing to preserve");
                continue;
            }

            let backup = self.backup_path(name);
            if let Err(source) = std::fs::copy(&original, &backup) {
                set.discard();
                return Err(PreserveError::Backup {
                    path: original,
                    backup,
                    source,
                });
            }

            tracing::debug!(file = %name, backup = %backup.display(), "backed up");
            set.entries.push(PreservedFile {
                name: name.clone(),
                original,
                backup,
            });
        }

        Ok(set)
    }

    /// Like [`begin`](Self::begin), but the returned guard restores on drop.
    pub fn guard(&self) -> Result<PreserveGuard, PreserveError> {
        Ok(PreserveGuard {
            set: Some(self.begin()?),
        })
    }

    /// Rebuild the preservation set from backups left by an interrupted run.
    pub fn recover(&self) -> PreservationSet {
        let entries = self
            .files
            .iter()
            .filter_map(|name| {
                let backup = self.backup_path(name);
                backup.is_file().then(|| PreservedFile {
                    name: name.clone(),
                    original: self.dir.join(name),
                    backup,
                })
            })
            .collect();
        PreservationSet { entries }
    }
}

/// A protected file that was backed up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreservedFile {
    name: String,
    original: PathBuf,
    backup: PathBuf,
}

impl PreservedFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn original(&self) -> &Path {
        &self.original
    }

    pub fn backup(&self) -> &Path {
        &self.backup
    }
}

/// Ordered record of the files backed up by one [`ConfigPreserver::begin`].
#[derive(Debug, Default, PartialEq, Eq)]
#[must_use = "a preservation set must be restored, or the backups stay on disk"]
pub struct PreservationSet {
    entries: Vec<PreservedFile>,
}

impl PreservationSet {
    pub fn entries(&self) -> &[PreservedFile] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy every backup over its original, then delete the backup.
    ///
    /// A backup that no longer exists is skipped and reported, not an error.
    pub fn restore(self) -> Result<RestoreReport, PreserveError> {
        let mut report = RestoreReport::default();

        for entry in self.entries {
            if !entry.backup.exists() {
                tracing::debug!(file = %entry.name, "backup missing, skipping");
                report.missing.push(entry.name);
                continue;
            }

            std::fs::copy(&entry.backup, &entry.original).map_err(|source| {
                PreserveError::Restore {
                    path: entry.original.clone(),
                    backup: entry.backup.clone(),
                    source,
                }
            })?;
            std::fs::remove_file(&entry.backup).map_err(|source| PreserveError::Cleanup {
                path: entry.backup.clone(),
                source,
            })?;

            tracing::debug!(file = %entry.name, "restored");
            report.restored.push(entry.name);
        }

        Ok(report)
    }

    /// Remove backups without restoring. Used when begin fails part-way.
    fn discard(&mut self) {
        for entry in self.entries.drain(..) {
            if let Err(e) = std::fs::remove_file(&entry.backup) {
                tracing::warn!(backup = %entry.backup.display(), error = %e, "failed to remove backup");
            }
        }
    }
}

/// What [`PreservationSet::restore`] did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestoreReport {
    /// Files copied back from their backup
    pub restored: Vec<String>,
    /// Files whose backup had disappeared
    pub missing: Vec<String>,
}

/// Scoped preservation: restores on drop unless [`restore`](Self::restore)
/// was called.
#[derive(Debug)]
pub struct PreserveGuard {
    set: Option<PreservationSet>,
}

impl PreserveGuard {
    /// Files currently backed up.
    pub fn entries(&self) -> &[PreservedFile] {
        self.set.as_ref().map(|s| s.entries()).unwrap_or_default()
    }

    pub fn restore(mut self) -> Result<RestoreReport, PreserveError> {
        match self.set.take() {
            Some(set) => set.restore(),
            None => Ok(RestoreReport::default()),
        }
    }
}

impl Drop for PreserveGuard {
    fn drop(&mut self) {
        let Some(set) = self.set.take() else {
            return;
        };
        if set.is_empty() {
            return;
        }
        match set.restore() {
            Ok(report) => tracing::warn!(
                restored = report.restored.len(),
                "restored protected files after an interrupted generation"
            ),
            Err(e) => tracing::error!(error = %e, "failed to restore protected files"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const PROTECTED: [&str; 5] = [
        "package.json",
        "tsconfig.json",
        ".npmignore",
        "pnpm-lock.yaml",
        "Cargo.toml",
    ];

    fn preserver(dir: &Path) -> ConfigPreserver {
        ConfigPreserver::new(dir, PROTECTED)
    }

    fn temp_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(BACKUP_SUFFIX))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_package_json_regenerated_then_restored() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("package.json"), "A").unwrap();
        fs::write(dir.join("tsconfig.json"), "B").unwrap();

        let set = preserver(dir).begin().unwrap();
        let names: Vec<&str> = set.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["package.json", "tsconfig.json"]);

        // generation overwrites one file and leaves the other alone
        fs::write(dir.join("package.json"), "GENERATED").unwrap();

        let report = set.restore().unwrap();
        assert_eq!(report.restored, ["package.json", "tsconfig.json"]);
        assert!(report.missing.is_empty());

        assert_eq!(fs::read_to_string(dir.join("package.json")).unwrap(), "A");
        assert_eq!(fs::read_to_string(dir.join("tsconfig.json")).unwrap(), "B");
        assert!(temp_files(dir).is_empty());
        assert!(!dir.join(".npmignore").exists());
    }

    #[test]
    fn test_absent_files_are_not_backed_up_or_created() {
        let temp = TempDir::new().unwrap();
        let set = preserver(temp.path()).begin().unwrap();
        assert!(set.is_empty());
        assert!(temp_files(temp.path()).is_empty());

        set.restore().unwrap();
        for name in PROTECTED {
            assert!(!temp.path().join(name).exists());
        }
    }

    #[test]
    fn test_missing_directory_is_empty_set() {
        let temp = TempDir::new().unwrap();
        let set = preserver(&temp.path().join("sdk/ts")).begin().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_unprotected_files_pass_through() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("package.json"), "A").unwrap();

        let set = preserver(dir).begin().unwrap();
        fs::write(dir.join("index.ts"), "generated").unwrap();
        set.restore().unwrap();

        assert_eq!(fs::read_to_string(dir.join("index.ts")).unwrap(), "generated");
    }

    #[test]
    fn test_restore_recreates_deleted_original() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("Cargo.toml"), "[package]").unwrap();

        let set = preserver(dir).begin().unwrap();
        fs::remove_file(dir.join("Cargo.toml")).unwrap();
        set.restore().unwrap();

        assert_eq!(fs::read_to_string(dir.join("Cargo.toml")).unwrap(), "[package]");
    }

    #[test]
    fn test_missing_backup_is_skipped() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("package.json"), "A").unwrap();
        fs::write(dir.join("tsconfig.json"), "B").unwrap();

        let preserver = preserver(dir);
        let set = preserver.begin().unwrap();
        fs::remove_file(preserver.backup_path("package.json")).unwrap();
        fs::write(dir.join("package.json"), "GENERATED").unwrap();

        let report = set.restore().unwrap();
        assert_eq!(report.restored, ["tsconfig.json"]);
        assert_eq!(report.missing, ["package.json"]);
        assert_eq!(fs::read_to_string(dir.join("package.json")).unwrap(), "GENERATED");
    }

    #[test]
    fn test_begin_restore_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("package.json"), "A").unwrap();
        fs::write(dir.join("pnpm-lock.yaml"), "lock").unwrap();

        let preserver = preserver(dir);
        for _ in 0..2 {
            preserver.begin().unwrap().restore().unwrap();
            assert_eq!(fs::read_to_string(dir.join("package.json")).unwrap(), "A");
            assert_eq!(fs::read_to_string(dir.join("pnpm-lock.yaml")).unwrap(), "lock");
            assert!(temp_files(dir).is_empty());
        }
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("package.json"), "A").unwrap();

        let result = (|| -> eyre::Result<()> {
            let _guard = preserver(dir).guard()?;
            fs::write(dir.join("package.json"), "GENERATED")?;
            eyre::bail!("renderer failed")
        })();

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(dir.join("package.json")).unwrap(), "A");
        assert!(temp_files(dir).is_empty());
    }

    #[test]
    fn test_guard_explicit_restore() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("tsconfig.json"), "B").unwrap();

        let guard = preserver(dir).guard().unwrap();
        assert_eq!(guard.entries().len(), 1);
        fs::write(dir.join("tsconfig.json"), "GENERATED").unwrap();

        let report = guard.restore().unwrap();
        assert_eq!(report.restored, ["tsconfig.json"]);
        assert_eq!(fs::read_to_string(dir.join("tsconfig.json")).unwrap(), "B");
    }

    #[test]
    fn test_failed_begin_removes_partial_backups() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("package.json"), "A").unwrap();
        // a directory cannot be copied as a file
        fs::create_dir(dir.join("tsconfig.json")).unwrap();

        let err = preserver(dir).begin().unwrap_err();
        assert!(matches!(err, PreserveError::Backup { ref path, .. } if path.ends_with("tsconfig.json")));
        assert!(temp_files(dir).is_empty());
        assert_eq!(fs::read_to_string(dir.join("package.json")).unwrap(), "A");
    }

    #[test]
    fn test_recover_finds_leftover_backups() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(dir.join("package.json"), "A").unwrap();

        let preserver = preserver(dir);
        let set = preserver.begin().unwrap();
        // simulate a killed process: the set is lost, the backup stays
        std::mem::forget(set);
        fs::write(dir.join("package.json"), "GENERATED").unwrap();

        let recovered = preserver.recover();
        assert_eq!(recovered.len(), 1);
        recovered.restore().unwrap();

        assert_eq!(fs::read_to_string(dir.join("package.json")).unwrap(), "A");
        assert!(temp_files(dir).is_empty());
    }

    #[test]
    fn test_recover_ignores_unprotected_temp_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.md.temp"), "x").unwrap();
        assert!(preserver(temp.path()).recover().is_empty());
    }
}
