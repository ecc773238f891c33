use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, eyre};
use sdkgen_core::{File, to_kebab_case};
use sdkgen_ir::RootNode;
use serde_json::{Map, Value, json};

use crate::code_file::KIT;

/// Version requirement for `@solana/kit` added to client packages.
pub const KIT_VERSION: &str = "^2.1.0";

/// The client package's `package.json`.
///
/// A missing manifest is created; an existing one only gains the
/// `@solana/kit` dependency when neither `dependencies` nor
/// `peerDependencies` declare it. Key order is preserved.
#[derive(Debug, Clone)]
pub struct PackageJson {
    package_folder: PathBuf,
    name: String,
    version: String,
}

impl PackageJson {
    pub fn new(
        package_folder: impl Into<PathBuf>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            package_folder: package_folder.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn for_root(root: &RootNode, package_folder: impl Into<PathBuf>) -> Self {
        let program = &root.program;
        Self::new(
            package_folder,
            format!("{}-client", to_kebab_case(&program.name)),
            &program.version,
        )
    }

    pub fn path(&self) -> PathBuf {
        self.package_folder.join("package.json")
    }

    /// A fresh manifest.
    pub fn render(&self) -> String {
        let manifest = json!({
            "name": self.name,
            "version": self.version,
            "type": "module",
            "dependencies": { KIT: KIT_VERSION },
        });
        pretty(&manifest)
    }

    /// Add `@solana/kit` to an existing manifest.
    ///
    /// Returns `None` when it is already declared.
    pub fn merge(&self, existing: &str) -> Result<Option<String>> {
        let mut manifest: Value = serde_json::from_str(existing).wrap_err("invalid package.json")?;
        let object = manifest
            .as_object_mut()
            .ok_or_else(|| eyre!("package.json is not an object"))?;

        let declared = ["dependencies", "peerDependencies"].iter().any(|key| {
            object
                .get(*key)
                .and_then(Value::as_object)
                .is_some_and(|deps| deps.contains_key(KIT))
        });
        if declared {
            return Ok(None);
        }

        let dependencies = object
            .entry("dependencies")
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(dependencies) = dependencies.as_object_mut() else {
            return Err(eyre!("\"dependencies\" in package.json is not an object"));
        };
        dependencies.insert(KIT.to_string(), Value::from(KIT_VERSION));
        Ok(Some(pretty(&manifest)))
    }

    /// The manifest file to write, if it needs creating or updating.
    pub fn sync(&self) -> Result<Option<File>> {
        let path = self.path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "creating client package manifest");
            return Ok(Some(File::new(path, self.render())));
        }

        let existing = read(&path)?;
        let merged = self
            .merge(&existing)
            .wrap_err_with(|| format!("failed to update '{}'", path.display()))?;
        Ok(merged.map(|content| File::new(path, content)))
    }
}

fn pretty(value: &Value) -> String {
    // serializing a `Value` cannot fail
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::testing::sample_root;

    use super::*;

    fn manifest() -> PackageJson {
        PackageJson::for_root(&sample_root(), "sdk/ts")
    }

    #[test]
    fn test_render_new_manifest() {
        assert_eq!(
            manifest().render(),
            "{\n  \"name\": \"abl-client\",\n  \"version\": \"0.1.0\",\n  \"type\": \"module\",\n  \
             \"dependencies\": {\n    \"@solana/kit\": \"^2.1.0\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_merge_keeps_key_order() {
        let existing = "{\n  \"version\": \"1.0.0\",\n  \"name\": \"my-sdk\",\n  \
                        \"dependencies\": {\n    \"bs58\": \"^6.0.0\"\n  }\n}\n";
        let merged = manifest().merge(existing).unwrap().unwrap();
        assert_eq!(
            merged,
            "{\n  \"version\": \"1.0.0\",\n  \"name\": \"my-sdk\",\n  \"dependencies\": {\n    \
             \"bs58\": \"^6.0.0\",\n    \"@solana/kit\": \"^2.1.0\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_merge_adds_dependencies_object() {
        let merged = manifest().merge("{\"name\": \"x\"}").unwrap().unwrap();
        let value: Value = serde_json::from_str(&merged).unwrap();
        assert_eq!(value["dependencies"]["@solana/kit"], KIT_VERSION);
    }

    #[test]
    fn test_merge_noop_when_peer_dependency() {
        let existing = r#"{"peerDependencies": {"@solana/kit": "^2.0.0"}}"#;
        assert_eq!(manifest().merge(existing).unwrap(), None);
    }

    #[test]
    fn test_merge_invalid_json() {
        let err = manifest().merge("{ nope").unwrap_err();
        assert_eq!(err.to_string(), "invalid package.json");
    }

    #[test]
    fn test_sync() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = PackageJson::for_root(&sample_root(), dir.path());

        let created = manifest.sync().unwrap().unwrap();
        assert_eq!(created.path(), dir.path().join("package.json"));
        created.write().unwrap();

        assert_eq!(manifest.sync().unwrap(), None);
    }
}
