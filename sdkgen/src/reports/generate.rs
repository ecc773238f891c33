//! Generate command report data structures.

use std::path::PathBuf;

use sdkgen_codegen::{language::PreviewFile, output::FormatOutcome};

use super::output::{Output, Report};
use crate::config::Strategy;

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Program name from the IDL.
    pub program: String,
    /// Program version from the IDL.
    pub version: String,
    /// Lint warnings from the pipeline.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        strategy: Strategy,
        targets: Vec<TargetOutcome>,
        /// Protected files put back after rendering (backup strategy).
        restored: Vec<String>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewTarget>),
}

/// What one renderer did to its output directory.
#[derive(Debug)]
pub struct TargetOutcome {
    pub language: &'static str,
    pub output_dir: PathBuf,
    /// Files in the generated tree.
    pub files: usize,
    pub written: usize,
    pub unchanged: usize,
    /// Stale files deleted from the output directory.
    pub removed: Vec<PathBuf>,
    /// Protected files the merge left alone.
    pub kept: Vec<PathBuf>,
    pub format: FormatOutcome,
    pub manifest: Option<ManifestChange>,
}

/// What happened to the package manifest next to the generated tree.
#[derive(Debug)]
pub struct ManifestChange {
    pub path: PathBuf,
    pub action: ManifestAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestAction {
    Created,
    Updated,
    /// Missing dependencies, but the file is protected and was left as is.
    Protected,
}

/// Files one renderer would write.
#[derive(Debug)]
pub struct PreviewTarget {
    pub language: &'static str,
    pub output_dir: PathBuf,
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written {
                strategy,
                targets,
                restored,
            } => self.render_written(out, *strategy, targets, restored),
            GenerationResult::Preview(targets) => self.render_preview(out, targets),
        }
    }
}

impl GenerateReport {
    fn render_written(
        &self,
        out: &mut dyn Output,
        strategy: Strategy,
        targets: &[TargetOutcome],
        restored: &[String],
    ) {
        out.preformatted(&format!("{} v{}", self.program, self.version));
        out.newline();

        for target in targets {
            out.section(&format!("{} ({} files)", target.language, target.files));
            out.key_value_indented("Generated", &target.output_dir.display().to_string());
            out.key_value_indented(
                "Changed",
                &format!("{} written, {} unchanged", target.written, target.unchanged),
            );
            match &target.format {
                FormatOutcome::Formatted => out.key_value_indented("Formatted", "yes"),
                FormatOutcome::Skipped(reason) => {
                    out.warning(&format!("{} formatting skipped: {}", target.language, reason))
                }
                FormatOutcome::Disabled => {}
            }
            for path in &target.kept {
                out.list_item(&format!("kept {}", path.display()));
            }
            for path in &target.removed {
                out.removed_item(&path.display().to_string());
            }
            if let Some(manifest) = &target.manifest {
                let path = manifest.path.display();
                match manifest.action {
                    ManifestAction::Created => out.added_item(&format!("created {path}")),
                    ManifestAction::Updated => out.added_item(&format!("updated {path}")),
                    ManifestAction::Protected => out.warning(&format!(
                        "{path} is protected and lacks dependencies; add them by hand"
                    )),
                }
            }
            out.newline();
        }

        if !restored.is_empty() {
            out.section(&format!("Restored ({} strategy)", strategy));
            for name in restored {
                out.list_item(name);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, targets: &[PreviewTarget]) {
        let mut total = 0;
        for target in targets {
            for file in &target.files {
                out.divider(&format!("{}/{}", target.output_dir.display(), file.path));
                out.preformatted(&file.content);
            }
            total += target.files.len();
        }

        out.divider("Summary");
        for target in targets {
            out.key_value(target.language, &format!("{} files", target.files.len()));
        }
        out.preformatted(&format!("{} files would be generated", total));
    }
}
