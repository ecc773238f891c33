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
        AccountTs, CategoryIndex, ErrorsTs, InstructionTs, PackageJson, ProgramTs, RenderContext,
        RootIndex, TypeTs,
    },
    naming::field_name,
};

/// Options for the TypeScript renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeScriptOptions {
    pub render: RenderOptions,
    /// Root of the client package, where `package.json` lives
    pub package_folder: Option<PathBuf>,
}

/// TypeScript client generator built on `@solana/kit` codecs.
pub struct Generator<'a> {
    root: &'a RootNode,
    options: TypeScriptOptions,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render_options(&self) -> &RenderOptions {
        &self.options.render
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let files = self.preview_files();
        tracing::debug!(files = files.len(), dir = %output_dir.display(), "rendering typescript client");
        write_tree(
            &files,
            output_dir,
            &self.options.render,
            &CommandFormatter::prettier(),
        )
    }

    fn package_manifest(&self) -> Result<Option<File>> {
        let Some(package_folder) = &self.options.package_folder else {
            return Ok(None);
        };
        PackageJson::for_root(self.root, package_folder).sync()
    }
}

impl<'a> Generator<'a> {
    pub fn new(root: &'a RootNode) -> Self {
        Self::with_options(root, TypeScriptOptions::default())
    }

    pub fn with_options(root: &'a RootNode, options: TypeScriptOptions) -> Self {
        Self { root, options }
    }

    pub fn options(&self) -> &TypeScriptOptions {
        &self.options
    }

    fn preview_files(&self) -> Vec<PreviewFile> {
        let mut collector = FileCollector::new(RenderContext::new(self.root));
        self.root.accept(&mut collector);
        collector.finish()
    }
}

/// Renders one file per node, then an `index.ts` barrel per non-empty
/// folder and the root barrel.
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
        let categories = [
            ("accounts", std::mem::take(&mut self.accounts)),
            ("errors", self.errors.take().into_iter().collect()),
            ("instructions", std::mem::take(&mut self.instructions)),
            ("programs", vec![self.ctx.program_file()]),
            ("types", std::mem::take(&mut self.types)),
        ];
        let mut folders = Vec::new();
        for (category, stems) in categories {
            if stems.is_empty() {
                continue;
            }
            folders.push(category);
            self.push(&CategoryIndex::new(category, stems));
        }
        self.push(&RootIndex::new(folders));

        self.files.sort_by(|a, b| a.path.cmp(&b.path));
        self.files
    }
}

impl Visitor for FileCollector<'_> {
    fn visit_program(&mut self, program: &ProgramNode) {
        self.push(&ProgramTs::new(self.ctx));
        if !program.errors.is_empty() {
            self.errors = Some(self.ctx.program_file());
            self.push(&ErrorsTs::new(self.ctx));
        }
    }

    fn visit_account(&mut self, account: &AccountNode) {
        self.accounts.push(field_name(&account.name));
        self.push(&AccountTs::new(self.ctx, account));
    }

    fn visit_instruction(&mut self, instruction: &InstructionNode) {
        self.instructions.push(field_name(&instruction.name));
        self.push(&InstructionTs::new(self.ctx, instruction));
    }

    fn visit_defined_type(&mut self, defined_type: &DefinedTypeNode) {
        self.types.push(field_name(&defined_type.name));
        self.push(&TypeTs::new(defined_type));
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
