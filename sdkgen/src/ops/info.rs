//! Info operation - program and project summary.

use eyre::{Context, Result};
use sdkgen_codegen::pipeline::{ComputedData, Pipeline, phases::ValidatePhase};
use sdkgen_idl::Idl;

use crate::{
    config::Config,
    reports::{InfoReport, SizeInfo, Stats, TargetInfo},
    targets::Target,
};

/// Execute the info operation.
///
/// Lints are skipped: info describes what is there, `check` judges it.
pub fn info(config: &Config, idl: Idl) -> Result<InfoReport> {
    let mut ctx = Pipeline::new()
        .validate_with(ValidatePhase::empty())
        .run(idl)
        .wrap_err("Failed to analyze IDL")?;
    let computed: ComputedData = ctx.take_computed()?;
    let idl = &ctx.idl;

    let accounts = computed
        .account_sizes
        .iter()
        .map(|(name, size)| SizeInfo {
            name: name.clone(),
            size: *size,
        })
        .collect();

    let targets = Target::all(config)
        .iter()
        .map(|target| TargetInfo {
            language: target.language(),
            output: target.output(config),
        })
        .collect();

    Ok(InfoReport {
        name: idl.name.clone(),
        description: idl.docs.first().cloned(),
        version: idl.version.to_string(),
        address: idl.address.clone(),
        idl_path: config.idl_path(),
        config_path: config
            .path()
            .map(|p| std::fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())),
        stats: Stats {
            instructions: idl.instructions.len(),
            accounts: idl.accounts.len(),
            types: idl.types.len(),
            errors: idl.errors.len(),
        },
        accounts,
        unused_types: computed.unused_types().map(String::from).collect(),
        targets,
        preserve_dir: config.preserve_dir(),
        protected_files: config.preserve.files.clone(),
        strategy: config.preserve.strategy,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use sdkgen_codegen::testing::{minimal_idl, sample_idl};

    use super::*;

    #[test]
    fn test_sample_info() {
        let report = info(&Config::default(), sample_idl()).unwrap();

        assert_eq!(report.name, "abl");
        assert_eq!(
            report.description.as_deref(),
            Some("Allow and block lists for token accounts")
        );
        assert_eq!(
            report.stats,
            Stats {
                instructions: 6,
                accounts: 2,
                types: 1,
                errors: 14,
            }
        );
        let sizes: Vec<_> = report.accounts.iter().map(|a| (a.name.as_str(), a.size)).collect();
        assert_eq!(sizes, [("listConfig", Some(74)), ("walletEntry", Some(65))]);
        assert!(report.unused_types.is_empty());
        assert!(report.config_path.is_none());
        assert_eq!(report.idl_path, PathBuf::from("./program/idl.json"));
    }

    #[test]
    fn test_unused_type_reported_without_failing() {
        let mut idl = sample_idl();
        idl.instructions.remove(0);
        idl.accounts.remove(0);

        let report = info(&Config::default(), idl).unwrap();
        assert_eq!(report.unused_types, ["mode"]);
    }

    #[test]
    fn test_targets_follow_config() {
        let mut config = Config::default();
        config.typescript = None;

        let report = info(&config, minimal_idl()).unwrap();
        let languages: Vec<_> = report.targets.iter().map(|t| t.language).collect();
        assert_eq!(languages, ["rust"]);
        assert!(report.accounts.is_empty());
        assert!(report.description.is_none());
    }
}
