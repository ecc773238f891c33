use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use sdkgen_core::{File, to_kebab_case};
use sdkgen_ir::RootNode;

const DEFAULT_EDITION: &str = "2021";

/// A dependency line, e.g. `borsh = { version = "1", features = ["derive"] }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    /// TOML value as written after `=`
    pub requirement: String,
}

impl Dependency {
    /// A plain version requirement.
    pub fn version(name: impl Into<String>, version: &str) -> Self {
        Self {
            name: name.into(),
            requirement: format!("\"{}\"", version),
        }
    }

    pub fn with_features(name: impl Into<String>, version: &str, features: &[&str]) -> Self {
        let features = features
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: name.into(),
            requirement: format!("{{ version = \"{}\", features = [{}] }}", version, features),
        }
    }

    fn line(&self) -> String {
        format!("{} = {}", self.name, self.requirement)
    }
}

/// The client crate's `Cargo.toml`.
///
/// A missing manifest is created; an existing one only gains the
/// dependencies it lacks, with every other line left as it was.
#[derive(Debug, Clone)]
pub struct CargoToml {
    crate_folder: PathBuf,
    name: String,
    version: String,
    dependencies: Vec<Dependency>,
}

impl CargoToml {
    pub fn new(
        crate_folder: impl Into<PathBuf>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            crate_folder: crate_folder.into(),
            name: name.into(),
            version: version.into(),
            dependencies: Vec::new(),
        }
    }

    /// Manifest for the client of `root`, with the dependencies its
    /// generated code uses.
    pub fn for_root(root: &RootNode, crate_folder: impl Into<PathBuf>) -> Self {
        let program = &root.program;
        let mut manifest = Self::new(
            crate_folder,
            format!("{}-client", to_kebab_case(&program.name)),
            &program.version,
        );

        let has_borsh = !program.accounts.is_empty()
            || !program.instructions.is_empty()
            || !program.defined_types.is_empty();
        if has_borsh {
            manifest = manifest.dependency(Dependency::with_features("borsh", "1", &["derive"]));
        }
        if !program.errors.is_empty() {
            manifest = manifest
                .dependency(Dependency::version("num-derive", "0.4"))
                .dependency(Dependency::version("num-traits", "0.2"));
        }
        manifest = manifest.dependency(Dependency::version("solana-program", "2.2"));
        if !program.errors.is_empty() {
            manifest = manifest.dependency(Dependency::version("thiserror", "2"));
        }
        manifest
    }

    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn path(&self) -> PathBuf {
        self.crate_folder.join("Cargo.toml")
    }

    /// A fresh manifest.
    pub fn render(&self) -> String {
        let mut out = format!(
            "[package]\nname = \"{}\"\nversion = \"{}\"\nedition = \"{}\"\n\n[dependencies]\n",
            self.name, self.version, DEFAULT_EDITION
        );
        for dependency in &self.dependencies {
            out.push_str(&dependency.line());
            out.push('\n');
        }
        out
    }

    /// Add the missing dependencies to an existing manifest.
    ///
    /// Returns `None` when every dependency is already declared.
    pub fn merge(&self, existing: &str) -> Result<Option<String>> {
        let table: toml::Table = toml::from_str(existing).wrap_err("invalid Cargo.toml")?;
        let declared = table.get("dependencies").and_then(|deps| deps.as_table());
        let missing: Vec<String> = self
            .dependencies
            .iter()
            .filter(|dep| declared.is_none_or(|deps| !deps.contains_key(&dep.name)))
            .map(Dependency::line)
            .collect();
        if missing.is_empty() {
            return Ok(None);
        }

        let mut lines: Vec<String> = existing.lines().map(str::to_string).collect();
        match lines.iter().position(|l| l.trim() == "[dependencies]") {
            Some(header) => {
                let next_section = lines[header + 1..]
                    .iter()
                    .position(|l| l.trim_start().starts_with('['))
                    .map_or(lines.len(), |offset| header + 1 + offset);
                let mut end = next_section;
                while end > header + 1 && lines[end - 1].trim().is_empty() {
                    end -= 1;
                }
                lines.splice(end..end, missing);
            }
            None => {
                if lines.last().is_some_and(|l| !l.trim().is_empty()) {
                    lines.push(String::new());
                }
                lines.push("[dependencies]".to_string());
                lines.extend(missing);
            }
        }

        let mut merged = lines.join("\n");
        merged.push('\n');
        Ok(Some(merged))
    }

    /// The manifest file to write, if it needs creating or updating.
    pub fn sync(&self) -> Result<Option<File>> {
        let path = self.path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "creating client crate manifest");
            return Ok(Some(File::new(path, self.render())));
        }

        let existing = read(&path)?;
        let merged = self
            .merge(&existing)
            .wrap_err_with(|| format!("failed to update '{}'", path.display()))?;
        Ok(merged.map(|content| File::new(path, content)))
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::testing::sample_root;

    use super::*;

    fn manifest() -> CargoToml {
        CargoToml::for_root(&sample_root(), "sdk/rust")
    }

    #[test]
    fn test_render_new_manifest() {
        assert_eq!(
            manifest().render(),
            "[package]\nname = \"abl-client\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n\
             [dependencies]\n\
             borsh = { version = \"1\", features = [\"derive\"] }\n\
             num-derive = \"0.4\"\n\
             num-traits = \"0.2\"\n\
             solana-program = \"2.2\"\n\
             thiserror = \"2\"\n"
        );
    }

    #[test]
    fn test_merge_keeps_existing_entries() {
        let existing = "[package]\nname = \"my-client\"\n\n[dependencies]\n\
                        # pinned\nborsh = \"0.10\"\nsolana-program = \"2.1\"\n\n\
                        [dev-dependencies]\ntokio = \"1\"\n";
        let merged = manifest().merge(existing).unwrap().unwrap();
        assert_eq!(
            merged,
            "[package]\nname = \"my-client\"\n\n[dependencies]\n\
             # pinned\nborsh = \"0.10\"\nsolana-program = \"2.1\"\n\
             num-derive = \"0.4\"\nnum-traits = \"0.2\"\nthiserror = \"2\"\n\n\
             [dev-dependencies]\ntokio = \"1\"\n"
        );
    }

    #[test]
    fn test_merge_appends_missing_section() {
        let merged = manifest()
            .merge("[package]\nname = \"c\"\n")
            .unwrap()
            .unwrap();
        assert!(merged.starts_with("[package]\nname = \"c\"\n\n[dependencies]\nborsh = "));
        assert!(merged.ends_with("thiserror = \"2\"\n"));
    }

    #[test]
    fn test_merge_complete_manifest_is_noop() {
        let complete = manifest().render();
        assert_eq!(manifest().merge(&complete).unwrap(), None);
    }

    #[test]
    fn test_merge_rejects_invalid_toml() {
        assert!(manifest().merge("[package\n").is_err());
    }

    #[test]
    fn test_sync() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = CargoToml::for_root(&sample_root(), dir.path());

        let created = manifest.sync().unwrap().unwrap();
        assert_eq!(created.path(), dir.path().join("Cargo.toml"));
        created.write().unwrap();

        assert!(manifest.sync().unwrap().is_none());
    }
}
