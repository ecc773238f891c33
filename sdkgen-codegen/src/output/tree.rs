use std::path::Path;

use eyre::{Result, WrapErr};
use sdkgen_core::{File, WriteResult};

use super::{FormatOutcome, Formatter};
use crate::language::{GenerateResult, PreviewFile, RenderOptions};

/// Write a rendered file set into `output_dir`.
///
/// Removes the directory first when `delete_folder_before_rendering` is set,
/// then runs `formatter` over the written files when `format_code` is set.
pub fn write_tree(
    files: &[PreviewFile],
    output_dir: &Path,
    options: &RenderOptions,
    formatter: &dyn Formatter,
) -> Result<GenerateResult> {
    let mut result = GenerateResult::default();

    if options.delete_folder_before_rendering && output_dir.exists() {
        std::fs::remove_dir_all(output_dir)
            .wrap_err_with(|| format!("failed to remove '{}'", output_dir.display()))?;
        tracing::debug!(dir = %output_dir.display(), "removed previous output");
        result.cleaned = true;
    }

    std::fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("failed to create '{}'", output_dir.display()))?;

    let mut written_paths = Vec::new();
    for file in files {
        let path = output_dir.join(&file.path);
        match File::new(&path, file.content.as_str()).write()? {
            WriteResult::Written => {
                written_paths.push(path);
                result.written.push(file.path.clone());
            }
            WriteResult::Unchanged => result.unchanged.push(file.path.clone()),
        }
    }

    result.format = if options.format_code {
        formatter.format(output_dir, &written_paths)
    } else {
        FormatOutcome::Disabled
    };

    tracing::info!(
        dir = %output_dir.display(),
        written = result.written.len(),
        unchanged = result.unchanged.len(),
        "wrote generated tree"
    );
    Ok(result)
}
