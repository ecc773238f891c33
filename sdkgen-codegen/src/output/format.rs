//! External code formatters.

use std::{
    io,
    path::{Path, PathBuf},
    process::Command,
};

/// What happened when formatting a generated tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The formatter ran successfully
    Formatted,
    /// The formatter could not run or failed; files are left as written
    Skipped(String),
    /// Formatting was turned off
    #[default]
    Disabled,
}

/// A formatter run over freshly written files.
pub trait Formatter {
    fn name(&self) -> &str;

    /// Format `files` in place. Never fails: problems become
    /// [`FormatOutcome::Skipped`].
    fn format(&self, dir: &Path, files: &[PathBuf]) -> FormatOutcome;
}

/// Formatter backed by an external program that takes file paths as arguments.
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
}

impl CommandFormatter {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `rustfmt --edition 2021`
    pub fn rustfmt() -> Self {
        Self::new("rustfmt", ["--edition", "2021"])
    }

    /// `prettier --write`
    pub fn prettier() -> Self {
        Self::new("prettier", ["--write"])
    }
}

impl Formatter for CommandFormatter {
    fn name(&self) -> &str {
        &self.program
    }

    fn format(&self, dir: &Path, files: &[PathBuf]) -> FormatOutcome {
        if files.is_empty() {
            return FormatOutcome::Formatted;
        }

        let output = Command::new(&self.program)
            .args(&self.args)
            .args(files)
            .current_dir(dir)
            .output();

        let outcome = match output {
            Ok(output) if output.status.success() => FormatOutcome::Formatted,
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let first_line = stderr.lines().next().unwrap_or("").trim();
                FormatOutcome::Skipped(format!(
                    "{} exited with {}{}{}",
                    self.program,
                    output.status,
                    if first_line.is_empty() { "" } else { ": " },
                    first_line
                ))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                FormatOutcome::Skipped(format!("{} not found on PATH", self.program))
            }
            Err(e) => FormatOutcome::Skipped(format!("failed to run {}: {}", self.program, e)),
        };

        match &outcome {
            FormatOutcome::Skipped(reason) => {
                tracing::warn!(formatter = %self.program, %reason, "skipped formatting")
            }
            _ => tracing::debug!(formatter = %self.program, files = files.len(), "formatted"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_formatter_is_skipped() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.rs");
        std::fs::write(&file, "fn a(){}").unwrap();

        let formatter = CommandFormatter::new("sdkgen-no-such-formatter", ["--check"]);
        let outcome = formatter.format(temp.path(), &[file.clone()]);

        assert_eq!(
            outcome,
            FormatOutcome::Skipped("sdkgen-no-such-formatter not found on PATH".into())
        );
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "fn a(){}");
    }

    #[test]
    fn test_no_files_is_formatted() {
        let temp = TempDir::new().unwrap();
        let formatter = CommandFormatter::new("sdkgen-no-such-formatter", Vec::<String>::new());
        assert_eq!(formatter.format(temp.path(), &[]), FormatOutcome::Formatted);
    }

    #[test]
    fn test_presets() {
        assert_eq!(CommandFormatter::rustfmt().name(), "rustfmt");
        assert_eq!(CommandFormatter::prettier().args, ["--write"]);
    }
}
