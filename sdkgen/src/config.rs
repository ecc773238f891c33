//! `sdkgen.toml`: where the IDL lives, which package files to protect and
//! which clients to render.
//!
//! Every path is relative to the directory holding the config file. Without
//! a config file the built-in defaults describe the usual layout:
//!
//! ```toml
//! idl = "program/idl.json"
//!
//! [preserve]
//! dir = "sdk/ts"
//! files = ["package.json", "tsconfig.json", ".npmignore", "pnpm-lock.yaml", "Cargo.toml"]
//! strategy = "staged"
//!
//! [targets.typescript]
//! output = "sdk/ts/src/generated"
//!
//! [targets.rust]
//! output = "sdk/rust/src/generated"
//! crate_folder = "sdk/rust"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

use std::fmt;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use sdkgen_codegen::language::RenderOptions;
use sdkgen_codegen_rust::DEFAULT_MODULE_PATH;
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "sdkgen.toml";

pub const DEFAULT_PROTECTED_FILES: [&str; 5] = [
    "package.json",
    "tsconfig.json",
    ".npmignore",
    "pnpm-lock.yaml",
    "Cargo.toml",
];

/// Result type for config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read config '{path}'")]
    #[diagnostic(code(sdkgen::config::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file '{path}' not found")]
    #[diagnostic(
        code(sdkgen::config::not_found),
        help("omit --config to use sdkgen.toml from the working directory or the built-in defaults")
    )]
    NotFound { path: PathBuf },

    #[error("failed to parse config: {message}")]
    #[diagnostic(code(sdkgen::config::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no targets configured")]
    #[diagnostic(
        code(sdkgen::config::no_targets),
        help("add [targets.typescript] or [targets.rust], or remove [targets] to render both")
    )]
    NoTargets {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty table")]
        span: Option<SourceSpan>,
    },

    #[error("protected file '{name}' must be a plain file name")]
    #[diagnostic(
        code(sdkgen::config::invalid_protected_file),
        help("list names relative to [preserve].dir, without directories")
    )]
    InvalidProtectedFile {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a file name")]
        span: Option<SourceSpan>,
        name: String,
    },
}

/// How protected files are kept safe during generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Render into a temporary directory and merge around protected files
    #[default]
    Staged,
    /// Copy protected files aside and restore them afterwards
    Backup,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Staged => write!(f, "staged"),
            Strategy::Backup => write!(f, "backup"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreserveConfig {
    pub dir: PathBuf,
    pub files: Vec<String>,
    pub strategy: Strategy,
}

impl Default for PreserveConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("sdk/ts"),
            files: DEFAULT_PROTECTED_FILES.map(String::from).to_vec(),
            strategy: Strategy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeScriptTarget {
    pub output: PathBuf,
    /// Folder whose `package.json` gains the client's dependencies
    pub package_folder: Option<PathBuf>,
    pub format_code: bool,
    pub delete_folder_before_rendering: bool,
}

impl Default for TypeScriptTarget {
    fn default() -> Self {
        Self {
            output: PathBuf::from("sdk/ts/src/generated"),
            package_folder: None,
            format_code: true,
            delete_folder_before_rendering: true,
        }
    }
}

impl TypeScriptTarget {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format_code: self.format_code,
            delete_folder_before_rendering: self.delete_folder_before_rendering,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RustTarget {
    pub output: PathBuf,
    /// Folder whose `Cargo.toml` gains the client's dependencies
    pub crate_folder: Option<PathBuf>,
    /// Path of the generated module inside the client crate
    pub module_path: String,
    pub format_code: bool,
    pub delete_folder_before_rendering: bool,
}

impl Default for RustTarget {
    fn default() -> Self {
        Self {
            output: PathBuf::from("sdk/rust/src/generated"),
            crate_folder: Some(PathBuf::from("sdk/rust")),
            module_path: DEFAULT_MODULE_PATH.to_string(),
            format_code: true,
            delete_folder_before_rendering: true,
        }
    }
}

impl RustTarget {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format_code: self.format_code,
            delete_folder_before_rendering: self.delete_folder_before_rendering,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default = "default_idl")]
    idl: PathBuf,
    #[serde(default)]
    preserve: PreserveConfig,
    targets: Option<RawTargets>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTargets {
    typescript: Option<TypeScriptTarget>,
    rust: Option<RustTarget>,
}

fn default_idl() -> PathBuf {
    PathBuf::from("program/idl.json")
}

/// A loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file it was read from, `None` for the built-in defaults
    path: Option<PathBuf>,
    base_dir: PathBuf,
    pub idl: PathBuf,
    pub preserve: PreserveConfig,
    pub typescript: Option<TypeScriptTarget>,
    pub rust: Option<RustTarget>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            base_dir: PathBuf::from("."),
            idl: default_idl(),
            preserve: PreserveConfig::default(),
            typescript: Some(TypeScriptTarget::default()),
            rust: Some(RustTarget::default()),
        }
    }
}

impl Config {
    /// Load `explicit`, or `sdkgen.toml` from the working directory, or
    /// fall back to the defaults.
    ///
    /// Only an explicit path is required to exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(Box::new(Error::NotFound {
                path: path.to_path_buf(),
            })),
            Some(path) => Self::open(path),
            None if Path::new(CONFIG_FILE).exists() => Self::open(CONFIG_FILE),
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse(&content, path)
    }

    /// Parse config text as if it had been read from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let source = || NamedSource::new(path.display().to_string(), content.to_string());
        let raw: RawConfig = toml::from_str(content).map_err(|e| {
            Box::new(Error::Parse {
                src: source(),
                span: e.span().map(SourceSpan::from),
                message: e.message().to_string(),
            })
        })?;

        if let Some(name) = raw.preserve.files.iter().find(|name| !is_file_name(name)) {
            return Err(Box::new(Error::InvalidProtectedFile {
                src: source(),
                span: span_of(content, &format!("\"{}\"", name)),
                name: name.clone(),
            }));
        }

        let (typescript, rust) = match raw.targets {
            None => (Some(TypeScriptTarget::default()), Some(RustTarget::default())),
            Some(RawTargets {
                typescript: None,
                rust: None,
            }) => {
                return Err(Box::new(Error::NoTargets {
                    src: source(),
                    span: span_of(content, "[targets]"),
                }));
            }
            Some(targets) => (targets.typescript, targets.rust),
        };

        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            base_dir,
            idl: raw.idl,
            preserve: raw.preserve,
            typescript,
            rust,
        })
    }

    /// The config file, if one was read.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Resolve a configured path against the config file's directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn idl_path(&self) -> PathBuf {
        self.resolve(&self.idl)
    }

    pub fn preserve_dir(&self) -> PathBuf {
        self.resolve(&self.preserve.dir)
    }
}

fn is_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

fn span_of(content: &str, needle: &str) -> Option<SourceSpan> {
    content
        .find(needle)
        .map(|offset| SourceSpan::from((offset, needle.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Config> {
        Config::parse(content, Path::new("project/sdkgen.toml"))
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.idl_path(), PathBuf::from("./program/idl.json"));
        assert_eq!(config.preserve_dir(), PathBuf::from("./sdk/ts"));
        assert_eq!(config.preserve.files, DEFAULT_PROTECTED_FILES);
        assert_eq!(config.preserve.strategy, Strategy::Staged);
        assert!(config.typescript.is_some());
        assert_eq!(
            config.rust.as_ref().and_then(|r| r.crate_folder.as_deref()),
            Some(Path::new("sdk/rust"))
        );
        assert!(config.path().is_none());
    }

    #[test]
    fn test_empty_file_is_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.preserve, PreserveConfig::default());
        assert_eq!(config.typescript, Some(TypeScriptTarget::default()));
        assert_eq!(config.rust, Some(RustTarget::default()));
    }

    #[test]
    fn test_paths_relative_to_config_dir() {
        let config = parse("idl = \"idl/abl.json\"\n[preserve]\ndir = \"clients/ts\"\n").unwrap();
        assert_eq!(config.idl_path(), PathBuf::from("project/idl/abl.json"));
        assert_eq!(config.preserve_dir(), PathBuf::from("project/clients/ts"));
        assert_eq!(config.preserve.files, DEFAULT_PROTECTED_FILES);
    }

    #[test]
    fn test_single_target_disables_other() {
        let config = parse(
            "[targets.rust]\noutput = \"client/src/generated\"\nformat_code = false\n",
        )
        .unwrap();
        assert!(config.typescript.is_none());
        let rust = config.rust.unwrap();
        assert_eq!(rust.output, PathBuf::from("client/src/generated"));
        assert!(!rust.render_options().format_code);
        assert!(rust.render_options().delete_folder_before_rendering);
        assert_eq!(rust.module_path, DEFAULT_MODULE_PATH);
    }

    #[test]
    fn test_strategy() {
        let config = parse("[preserve]\nstrategy = \"backup\"\n").unwrap();
        assert_eq!(config.preserve.strategy, Strategy::Backup);
        assert_eq!(config.preserve.strategy.to_string(), "backup");
    }

    #[test]
    fn test_unknown_key_has_span() {
        let err = parse("[preserve]\nfolder = \"sdk\"\n").unwrap_err();
        match *err {
            Error::Parse { span, message, .. } => {
                assert!(span.is_some());
                assert!(message.contains("unknown field"), "{message}");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_targets_rejected() {
        let err = parse("[targets]\n").unwrap_err();
        match *err {
            Error::NoTargets { span, .. } => assert_eq!(span, Some((0, 9).into())),
            other => panic!("expected no targets error, got {:?}", other),
        }
    }

    #[test]
    fn test_protected_file_must_be_a_name() {
        let err = parse("[preserve]\nfiles = [\"package.json\", \"../Cargo.toml\"]\n").unwrap_err();
        match *err {
            Error::InvalidProtectedFile { name, span, .. } => {
                assert_eq!(name, "../Cargo.toml");
                assert!(span.is_some());
            }
            other => panic!("expected invalid file error, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(*err, Error::NotFound { .. }));
    }

    #[test]
    fn test_open_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "idl = \"idl.json\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.path(), Some(path.as_path()));
        assert_eq!(config.idl_path(), dir.path().join("idl.json"));
    }
}
