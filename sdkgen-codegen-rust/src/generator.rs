use std::path::{Component, Path, PathBuf};

use eyre::Result;
use sdkgen_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile, RenderOptions},
    output::{CommandFormatter, write_tree},
};
use sdkgen_core::{File, GeneratedFile};
use sdkgen_ir::{AccountNode, DefinedTypeNode, InstructionNode, ProgramNode, RootNode, Visitor};

use crate::{
    files::{
        AccountRs, CargoToml, CategoryMod, ErrorsRs, GeneratedMod, InstructionRs, ProgramsRs,
        RenderContext, TypeRs,
    },
    naming::field_name,
};

pub const DEFAULT_MODULE_PATH: &str = "crate::generated";

/// Options for the Rust renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustOptions {
    pub render: RenderOptions,
    /// Root of the client crate, where `Cargo.toml` lives
    pub crate_folder: Option<PathBuf>,
    /// Path of the generated module inside the client crate
    pub module_path: String,
}

impl Default for RustOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            crate_folder: None,
            module_path: DEFAULT_MODULE_PATH.to_string(),
        }
    }
}

/// Rust client generator producing borsh types and instruction builders
/// for `solana-program`.
pub struct Generator<'a> {
    root: &'a RootNode,
    options: RustOptions,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn render_options(&self) -> &RenderOptions {
        &self.options.render
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let files = self.preview_files();
        tracing::debug!(files = files.len(), dir = %output_dir.display(), "rendering rust client");
        write_tree(
            &files,
            output_dir,
            &self.options.render,
            &CommandFormatter::rustfmt(),
        )
    }

    fn package_manifest(&self) -> Result<Option<File>> {
        let Some(crate_folder) = &self.options.crate_folder else {
            return Ok(None);
        };
        CargoToml::for_root(self.root, crate_folder).sync()
    }
}

impl<'a> Generator<'a> {
    pub fn new(root: &'a RootNode) -> Self {
        Self::with_options(root, RustOptions::default())
    }

    pub fn with_options(root: &'a RootNode, options: RustOptions) -> Self {
        Self { root, options }
    }

    pub fn options(&self) -> &RustOptions {
        &self.options
    }

    fn preview_files(&self) -> Vec<PreviewFile> {
        let ctx = RenderContext::new(self.root, &self.options.module_path);
        let mut collector = FileCollector::new(ctx);
        self.root.accept(&mut collector);
        collector.finish()
    }
}

/// Renders one file per node while walking the tree, then the `mod.rs`
/// files for the categories that ended up non-empty.
struct FileCollector<'a> {
    ctx: RenderContext<'a>,
    files: Vec<PreviewFile>,
    accounts: Vec<String>,
    instructions: Vec<String>,
    types: Vec<String>,
    errors: Option<String>,
}

impl<'a> FileCollector<'a> {
    fn new(ctx: RenderContext<'a>) -> Self {
        Self {
            ctx,
            files: Vec::new(),
            accounts: Vec::new(),
            instructions: Vec::new(),
            types: Vec::new(),
            errors: None,
        }
    }

    fn push(&mut self, file: &impl GeneratedFile) {
        self.files.push(PreviewFile::new(
            relative_path(&file.path(Path::new(""))),
            file.render(),
        ));
    }

    fn finish(mut self) -> Vec<PreviewFile> {
        let mut modules = vec!["programs"];
        let categories = [
            ("accounts", std::mem::take(&mut self.accounts)),
            ("instructions", std::mem::take(&mut self.instructions)),
            ("types", std::mem::take(&mut self.types)),
            ("errors", self.errors.take().into_iter().collect()),
        ];
        for (category, members) in categories {
            if members.is_empty() {
                continue;
            }
            modules.push(category);
            self.push(&CategoryMod::new(category, members));
        }
        self.push(&GeneratedMod::new(modules));

        self.files.sort_by(|a, b| a.path.cmp(&b.path));
        self.files
    }
}

impl Visitor for FileCollector<'_> {
    fn visit_program(&mut self, program: &ProgramNode) {
        self.push(&ProgramsRs::new(self.ctx));
        if !program.errors.is_empty() {
            let errors = ErrorsRs::new(self.ctx, &program.errors);
            self.errors = Some(errors.module_name());
            self.push(&errors);
        }
    }

    fn visit_account(&mut self, account: &AccountNode) {
        self.accounts.push(field_name(&account.name));
        self.push(&AccountRs::new(self.ctx, account));
    }

    fn visit_instruction(&mut self, instruction: &InstructionNode) {
        self.instructions.push(field_name(&instruction.name));
        self.push(&InstructionRs::new(self.ctx, instruction));
    }

    fn visit_defined_type(&mut self, defined_type: &DefinedTypeNode) {
        self.types.push(field_name(&defined_type.name));
        self.push(&TypeRs::new(self.ctx, defined_type));
    }
}

/// `/`-separated form of a relative path.
fn relative_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
