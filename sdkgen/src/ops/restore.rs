//! Restore operation - recover protected files after an interrupted run.

use eyre::{Context, Result};
use sdkgen_codegen::output::ConfigPreserver;

use crate::{config::Config, reports::RecoverReport};

/// Execute the restore operation.
///
/// Finds `<name>.temp` backups of protected files and copies them back
/// over the originals. With `dry_run` the backups are only listed.
pub fn restore(config: &Config, dry_run: bool) -> Result<RecoverReport> {
    let dir = config.preserve_dir();
    let leftovers = ConfigPreserver::new(&dir, config.preserve.files.clone()).recover();

    if dry_run {
        return Ok(RecoverReport {
            restored: leftovers.entries().iter().map(|e| e.name().to_string()).collect(),
            missing: Vec::new(),
            dir,
            dry_run,
        });
    }

    let report = leftovers
        .restore()
        .wrap_err_with(|| format!("Failed to restore protected files in '{}'", dir.display()))?;
    tracing::info!(restored = report.restored.len(), "recovered protected files");

    Ok(RecoverReport {
        dir,
        dry_run,
        restored: report.restored,
        missing: report.missing,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn project() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::parse("[preserve]\ndir = \"pkg\"\n", &dir.path().join("sdkgen.toml")).unwrap();
        let pkg = dir.path().join("pkg");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("package.json"), "GENERATED").unwrap();
        fs::write(pkg.join("package.json.temp"), "A").unwrap();
        fs::write(pkg.join("notes.md.temp"), "unrelated").unwrap();
        (dir, config)
    }

    #[test]
    fn test_restore_leftover_backups() {
        let (dir, config) = project();
        let pkg = dir.path().join("pkg");

        let report = restore(&config, false).unwrap();
        assert_eq!(report.restored, ["package.json"]);
        assert_eq!(fs::read_to_string(pkg.join("package.json")).unwrap(), "A");
        assert!(!pkg.join("package.json.temp").exists());
        // only protected names are recovered
        assert!(pkg.join("notes.md.temp").exists());
    }

    #[test]
    fn test_dry_run_leaves_backups() {
        let (dir, config) = project();
        let pkg = dir.path().join("pkg");

        let report = restore(&config, true).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.restored, ["package.json"]);
        assert_eq!(fs::read_to_string(pkg.join("package.json")).unwrap(), "GENERATED");
        assert!(pkg.join("package.json.temp").exists());
    }

    #[test]
    fn test_nothing_to_restore() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::parse("", &dir.path().join("sdkgen.toml")).unwrap();

        let report = restore(&config, false).unwrap();
        assert!(report.restored.is_empty());
        assert!(report.missing.is_empty());
    }
}
