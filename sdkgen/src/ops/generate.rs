//! Generate operation - render every configured client.
//!
//! Renderers run one after another, TypeScript first. Protected package
//! files are handled by the configured [`Strategy`]:
//!
//! - `staged`: each renderer writes into a temporary directory which is
//!   merged into its output around the protected files.
//! - `backup`: protected files are copied aside before the first renderer
//!   and copied back after the last one. The guard puts them back if a
//!   renderer fails.
//!
//! Package manifests are synced last. A manifest on the protected list that
//! already exists is never rewritten; the report asks for the missing
//! dependencies to be added by hand instead.

use std::path::Path;

use eyre::{Context, Result, bail};
use sdkgen_codegen::{
    language::LanguageCodegen,
    output::{ConfigPreserver, Protection, StagingArea},
    pipeline::Pipeline,
};
use sdkgen_core::WriteResult;
use sdkgen_idl::Idl;
use sdkgen_ir::RootNode;

use super::describe;
use crate::{
    config::{Config, Strategy},
    reports::{
        GenerateReport, GenerationResult, ManifestAction, ManifestChange, PreviewTarget,
        TargetOutcome,
    },
    targets::Target,
};

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Preview without writing files.
    pub dry_run: bool,
    /// Overrides the configured strategy.
    pub strategy: Option<Strategy>,
}

/// Execute the generate operation.
pub fn generate(config: &Config, idl: Idl, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut ctx = Pipeline::new().run(idl).wrap_err("Pipeline failed")?;
    let warnings = ctx.warnings().map(describe).collect();
    let program = ctx.idl.name.clone();
    let version = ctx.idl.version.to_string();
    let root = ctx.take_root()?;

    let targets = Target::all(config);
    let strategy = opts.strategy.unwrap_or(config.preserve.strategy);

    let result = if opts.dry_run {
        GenerationResult::Preview(preview(config, &root, &targets))
    } else {
        match strategy {
            Strategy::Staged => GenerationResult::Written {
                strategy,
                targets: generate_staged(config, &root, &targets)?,
                restored: Vec::new(),
            },
            Strategy::Backup => {
                let (outcomes, restored) = generate_with_backup(config, &root, &targets)?;
                GenerationResult::Written {
                    strategy,
                    targets: outcomes,
                    restored,
                }
            }
        }
    };

    Ok(GenerateReport {
        program,
        version,
        warnings,
        result,
    })
}

fn preview(config: &Config, root: &RootNode, targets: &[Target<'_>]) -> Vec<PreviewTarget> {
    targets
        .iter()
        .map(|target| PreviewTarget {
            language: target.language(),
            output_dir: target.output(config),
            files: target.generator(root, config).preview(),
        })
        .collect()
}

fn generate_staged(
    config: &Config,
    root: &RootNode,
    targets: &[Target<'_>],
) -> Result<Vec<TargetOutcome>> {
    let protection = Protection::new(config.preserve_dir(), config.preserve.files.clone());
    let mut outcomes = Vec::with_capacity(targets.len());

    for target in targets {
        let output_dir = target.output(config);
        let generator = target.generator(root, config);
        let staging = StagingArea::new_in(staging_parent(&output_dir))?;
        let staged = generator
            .generate(staging.path())
            .wrap_err_with(|| format!("Failed to generate {} client", target.language()))?;
        let merge = staging
            .commit(&output_dir, &protection, target.delete_folder_before_rendering())
            .wrap_err_with(|| format!("Failed to merge into '{}'", output_dir.display()))?;

        outcomes.push(TargetOutcome {
            language: target.language(),
            output_dir,
            files: staged.file_count(),
            written: merge.written.len(),
            unchanged: merge.unchanged.len(),
            removed: merge.removed,
            kept: merge.kept,
            format: staged.format,
            manifest: sync_manifest(generator.as_ref(), &protection)?,
        });
    }

    Ok(outcomes)
}

fn generate_with_backup(
    config: &Config,
    root: &RootNode,
    targets: &[Target<'_>],
) -> Result<(Vec<TargetOutcome>, Vec<String>)> {
    let preserver = ConfigPreserver::new(config.preserve_dir(), config.preserve.files.clone());
    let leftovers = preserver.recover();
    if !leftovers.is_empty() {
        let names: Vec<_> = leftovers.entries().iter().map(|e| e.name()).collect();
        bail!(
            "backups from an interrupted run are still in '{}' ({}); run `sdkgen restore` first",
            preserver.dir().display(),
            names.join(", ")
        );
    }

    // Backups sit next to the originals, so deleting an output folder that
    // holds them would delete both.
    let protection = Protection::new(config.preserve_dir(), config.preserve.files.clone());
    for target in targets {
        let output_dir = target.output(config);
        if target.delete_folder_before_rendering() && protection.is_within(&output_dir) {
            bail!(
                "the {} output '{}' contains the preserve dir '{}' and is deleted before \
                 rendering; use the staged strategy or move the output",
                target.language(),
                output_dir.display(),
                preserver.dir().display()
            );
        }
    }

    let guard = preserver.guard().wrap_err("Failed to back up protected files")?;
    tracing::info!(files = guard.entries().len(), "protected files backed up");

    let mut generators = Vec::with_capacity(targets.len());
    let mut outcomes = Vec::with_capacity(targets.len());
    for target in targets {
        let output_dir = target.output(config);
        let generator = target.generator(root, config);
        let result = generator
            .generate(&output_dir)
            .wrap_err_with(|| format!("Failed to generate {} client", target.language()))?;

        outcomes.push(TargetOutcome {
            language: target.language(),
            output_dir,
            files: result.file_count(),
            written: result.written.len(),
            unchanged: result.unchanged.len(),
            removed: Vec::new(),
            kept: Vec::new(),
            format: result.format,
            manifest: None,
        });
        generators.push(generator);
    }

    let report = guard.restore().wrap_err("Failed to restore protected files")?;
    if !report.missing.is_empty() {
        bail!(
            "backups of {} disappeared during generation; the originals in '{}' could not be restored",
            report.missing.join(", "),
            preserver.dir().display()
        );
    }

    for (outcome, generator) in outcomes.iter_mut().zip(&generators) {
        outcome.manifest = sync_manifest(generator.as_ref(), &protection)?;
    }

    Ok((outcomes, report.restored))
}

/// Directory the staging area is created in: the target's parent.
fn staging_parent(output_dir: &Path) -> &Path {
    match output_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write the renderer's package manifest if it needs one.
///
/// Existing protected manifests are left byte-for-byte as they are.
fn sync_manifest(
    generator: &dyn LanguageCodegen,
    protection: &Protection,
) -> Result<Option<ManifestChange>> {
    let Some(manifest) = generator.package_manifest()? else {
        return Ok(None);
    };
    let path = manifest.path().to_path_buf();

    if manifest.exists() && protection.protects(&path) {
        tracing::warn!(path = %path.display(), "protected manifest lacks dependencies, not rewriting");
        return Ok(Some(ManifestChange {
            path,
            action: ManifestAction::Protected,
        }));
    }

    let action = if manifest.exists() {
        ManifestAction::Updated
    } else {
        ManifestAction::Created
    };
    match manifest.write()? {
        WriteResult::Written => {
            tracing::info!(path = %path.display(), ?action, "synced package manifest");
            Ok(Some(ManifestChange { path, action }))
        }
        WriteResult::Unchanged => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use sdkgen_codegen::{output::BACKUP_SUFFIX, testing::sample_idl};

    use super::*;

    const PACKAGE_JSON: &str = "{\n  \"name\": \"my-sdk\",\n  \"private\": true\n}\n";

    /// A project with both targets, formatting off, and a hand-written
    /// package in `sdk/ts`.
    fn project(strategy: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("sdkgen.toml");
        let config = Config::parse(
            &format!(
                "[preserve]\nstrategy = \"{strategy}\"\n\n\
                 [targets.typescript]\npackage_folder = \"sdk/ts\"\nformat_code = false\n\n\
                 [targets.rust]\nformat_code = false\n"
            ),
            &config_path,
        )
        .unwrap();

        let package = dir.path().join("sdk/ts");
        fs::create_dir_all(package.join("src/generated")).unwrap();
        fs::write(package.join("package.json"), PACKAGE_JSON).unwrap();
        fs::write(package.join("tsconfig.json"), "{}\n").unwrap();
        fs::write(package.join("src/generated/stale.ts"), "export {};\n").unwrap();
        (dir, config)
    }

    fn outcome<'r>(report: &'r GenerateReport, language: &str) -> &'r TargetOutcome {
        let GenerationResult::Written { targets, .. } = &report.result else {
            panic!("expected written result");
        };
        targets.iter().find(|t| t.language == language).unwrap()
    }

    fn leftover_backups(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(BACKUP_SUFFIX))
            .count()
    }

    #[test]
    fn test_staged_generation() {
        let (dir, config) = project("staged");
        let report = generate(&config, sample_idl(), GenerateOptions::default()).unwrap();

        let ts = dir.path().join("sdk/ts");
        assert!(ts.join("src/generated/instructions/createList.ts").exists());
        assert!(!ts.join("src/generated/stale.ts").exists());
        assert!(dir.path().join("sdk/rust/src/generated/mod.rs").exists());
        assert_eq!(fs::read_to_string(ts.join("tsconfig.json")).unwrap(), "{}\n");

        let typescript = outcome(&report, "typescript");
        assert_eq!(typescript.written, typescript.files);
        assert_eq!(typescript.removed, [ts.join("src/generated/stale.ts")]);
        let manifest = typescript.manifest.as_ref().unwrap();
        assert_eq!(manifest.action, ManifestAction::Protected);
        assert_eq!(fs::read_to_string(ts.join("package.json")).unwrap(), PACKAGE_JSON);

        let rust = outcome(&report, "rust");
        assert_eq!(rust.manifest.as_ref().unwrap().action, ManifestAction::Created);
        assert!(dir.path().join("sdk/rust/Cargo.toml").exists());
    }

    #[test]
    fn test_rerun_is_unchanged() {
        let (_dir, config) = project("staged");
        generate(&config, sample_idl(), GenerateOptions::default()).unwrap();
        let report = generate(&config, sample_idl(), GenerateOptions::default()).unwrap();

        let typescript = outcome(&report, "typescript");
        assert_eq!(typescript.written, 0);
        assert_eq!(typescript.unchanged, typescript.files);
        assert!(outcome(&report, "rust").manifest.is_none());
    }

    #[test]
    fn test_backup_generation_restores_package_files() {
        let (dir, config) = project("backup");
        let report = generate(&config, sample_idl(), GenerateOptions::default()).unwrap();

        let ts = dir.path().join("sdk/ts");
        let GenerationResult::Written { restored, .. } = &report.result else {
            panic!("expected written result");
        };
        assert_eq!(restored, &["package.json", "tsconfig.json"]);
        assert_eq!(leftover_backups(&ts), 0);
        assert_eq!(fs::read_to_string(ts.join("tsconfig.json")).unwrap(), "{}\n");
        assert!(!ts.join(".npmignore").exists());
        assert!(ts.join("src/generated/index.ts").exists());
    }

    #[test]
    fn test_backup_keeps_protected_manifest_bytes() {
        let (dir, config) = project("backup");
        let package = dir.path().join("sdk/ts/package.json");
        fs::write(&package, "{\"name\":\"x\"}\n").unwrap();

        let report = generate(&config, sample_idl(), GenerateOptions::default()).unwrap();

        assert_eq!(fs::read_to_string(&package).unwrap(), "{\"name\":\"x\"}\n");
        let manifest = outcome(&report, "typescript").manifest.as_ref().unwrap();
        assert_eq!(manifest.action, ManifestAction::Protected);
    }

    #[test]
    fn test_backup_rejects_output_holding_preserve_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::parse(
            "[preserve]\nstrategy = \"backup\"\n\n\
             [targets.typescript]\noutput = \"sdk/ts\"\nformat_code = false\n",
            &dir.path().join("sdkgen.toml"),
        )
        .unwrap();
        let ts = dir.path().join("sdk/ts");
        fs::create_dir_all(&ts).unwrap();
        fs::write(ts.join("package.json"), "A").unwrap();

        let err = generate(&config, sample_idl(), GenerateOptions::default()).unwrap_err();

        assert!(err.to_string().contains("staged strategy"), "{err}");
        assert_eq!(fs::read_to_string(ts.join("package.json")).unwrap(), "A");
        assert_eq!(leftover_backups(&ts), 0);
        assert!(!ts.join("index.ts").exists());
    }

    #[test]
    fn test_staged_keeps_files_when_output_holds_preserve_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::parse(
            "[targets.typescript]\noutput = \"sdk/ts\"\nformat_code = false\n",
            &dir.path().join("sdkgen.toml"),
        )
        .unwrap();
        let ts = dir.path().join("sdk/ts");
        fs::create_dir_all(&ts).unwrap();
        fs::write(ts.join("package.json"), "A").unwrap();

        generate(&config, sample_idl(), GenerateOptions::default()).unwrap();

        assert_eq!(fs::read_to_string(ts.join("package.json")).unwrap(), "A");
        assert!(ts.join("index.ts").exists());
    }

    #[test]
    fn test_backup_refuses_leftover_backups() {
        let (dir, config) = project("backup");
        let ts = dir.path().join("sdk/ts");
        fs::write(ts.join("package.json.temp"), PACKAGE_JSON).unwrap();

        let err = generate(&config, sample_idl(), GenerateOptions::default()).unwrap_err();
        assert!(err.to_string().contains("sdkgen restore"), "{err}");
        assert!(!ts.join("src/generated/index.ts").exists());
    }

    #[test]
    fn test_strategy_override() {
        let (dir, config) = project("staged");
        let opts = GenerateOptions {
            dry_run: false,
            strategy: Some(Strategy::Backup),
        };
        let report = generate(&config, sample_idl(), opts).unwrap();

        let GenerationResult::Written { strategy, .. } = &report.result else {
            panic!("expected written result");
        };
        assert_eq!(*strategy, Strategy::Backup);
        assert_eq!(leftover_backups(&dir.path().join("sdk/ts")), 0);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (dir, config) = project("staged");
        let opts = GenerateOptions {
            dry_run: true,
            strategy: None,
        };
        let report = generate(&config, sample_idl(), opts).unwrap();

        let GenerationResult::Preview(targets) = &report.result else {
            panic!("expected preview");
        };
        let languages: Vec<_> = targets.iter().map(|t| t.language).collect();
        assert_eq!(languages, ["typescript", "rust"]);
        assert!(targets.iter().all(|t| !t.files.is_empty()));
        assert!(dir.path().join("sdk/ts/src/generated/stale.ts").exists());
        assert!(!dir.path().join("sdk/rust").exists());
    }
}
