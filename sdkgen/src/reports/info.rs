//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};
use crate::config::Strategy;

/// Report data from program info.
#[derive(Debug)]
pub struct InfoReport {
    /// Program name.
    pub name: String,
    /// First line of the program docs.
    pub description: Option<String>,
    pub version: String,
    /// Base58 program address.
    pub address: String,
    pub idl_path: PathBuf,
    /// Config file, `None` when running on defaults.
    pub config_path: Option<PathBuf>,
    pub stats: Stats,
    /// Encoded account sizes.
    pub accounts: Vec<SizeInfo>,
    /// Defined types nothing refers to.
    pub unused_types: Vec<String>,
    pub targets: Vec<TargetInfo>,
    pub preserve_dir: PathBuf,
    pub protected_files: Vec<String>,
    pub strategy: Strategy,
}

/// Declaration counts.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub instructions: usize,
    pub accounts: usize,
    pub types: usize,
    pub errors: usize,
}

#[derive(Debug)]
pub struct SizeInfo {
    pub name: String,
    /// `None` when the size depends on the data.
    pub size: Option<usize>,
}

#[derive(Debug)]
pub struct TargetInfo {
    pub language: &'static str,
    pub output: PathBuf,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        // Header
        out.preformatted(&format!("  {}", self.name));
        out.preformatted(&format!("  {}", "─".repeat(self.name.len())));
        if let Some(desc) = &self.description {
            out.preformatted(&format!("  {}", desc));
        }
        out.newline();

        out.preformatted(&format!("  Version     {}", self.version));
        out.preformatted(&format!("  Address     {}", self.address));
        out.preformatted(&format!("  IDL         {}", self.idl_path.display()));
        let config = self
            .config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string());
        out.preformatted(&format!("  Config      {}", config));
        out.newline();

        out.preformatted("  Statistics");
        out.preformatted("  ──────────");
        out.preformatted(&format!("  Instructions {}", self.stats.instructions));
        out.preformatted(&format!("  Accounts    {}", self.stats.accounts));
        out.preformatted(&format!("  Types       {}", self.stats.types));
        out.preformatted(&format!("  Errors      {}", self.stats.errors));
        out.newline();

        if !self.accounts.is_empty() {
            out.preformatted("  Accounts");
            out.preformatted("  ────────");
            let width = self.accounts.iter().map(|a| a.name.len()).max().unwrap_or(0);
            for account in &self.accounts {
                let size = match account.size {
                    Some(bytes) => format!("{} bytes", bytes),
                    None => "variable".to_string(),
                };
                out.preformatted(&format!("  {:width$}  {}", account.name, size));
            }
            out.newline();
        }

        if !self.unused_types.is_empty() {
            out.preformatted(&format!("  Unused types: {}", self.unused_types.join(", ")));
            out.newline();
        }

        out.preformatted("  Targets");
        out.preformatted("  ───────");
        for target in &self.targets {
            out.preformatted(&format!("  {:<11} {}", target.language, target.output.display()));
        }
        out.newline();

        out.preformatted("  Preserve");
        out.preformatted("  ────────");
        out.preformatted(&format!("  Directory   {}", self.preserve_dir.display()));
        out.preformatted(&format!("  Strategy    {}", self.strategy));
        out.preformatted(&format!("  Files       {}", self.protected_files.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render() {
        let report = InfoReport {
            name: "abl".into(),
            description: Some("Allow and block lists".into()),
            version: "0.1.0".into(),
            address: "ABL37q2e55mQ87KTRe6yF89TJoeysHKipwVwSRRPbTNY".into(),
            idl_path: PathBuf::from("program/idl.json"),
            config_path: None,
            stats: Stats {
                instructions: 6,
                accounts: 2,
                types: 1,
                errors: 14,
            },
            accounts: vec![
                SizeInfo {
                    name: "listConfig".into(),
                    size: Some(74),
                },
                SizeInfo {
                    name: "memo".into(),
                    size: None,
                },
            ],
            unused_types: Vec::new(),
            targets: vec![TargetInfo {
                language: "rust",
                output: PathBuf::from("sdk/rust/src/generated"),
            }],
            preserve_dir: PathBuf::from("sdk/ts"),
            protected_files: vec!["package.json".into(), "Cargo.toml".into()],
            strategy: Strategy::Staged,
        };

        let rendered = BufferOutput::render(&report);
        assert!(rendered.starts_with("\n  abl\n  ───\n  Allow and block lists\n"));
        assert!(rendered.contains("  Config      (defaults)\n"));
        assert!(rendered.contains("  listConfig  74 bytes\n  memo        variable\n"));
        assert!(rendered.contains("  rust        sdk/rust/src/generated\n"));
        assert!(rendered.ends_with("  Files       package.json, Cargo.toml"));
        assert!(!rendered.contains("Unused types"));
    }
}
