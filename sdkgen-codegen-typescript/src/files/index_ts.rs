use std::path::{Path, PathBuf};

use sdkgen_core::GeneratedFile;

use crate::{ast::Export, code_file::CodeFile};

/// The root `index.ts`, re-exporting every category folder present.
pub struct RootIndex {
    categories: Vec<&'static str>,
}

impl RootIndex {
    pub fn new(categories: impl IntoIterator<Item = &'static str>) -> Self {
        let mut categories: Vec<_> = categories.into_iter().collect();
        categories.sort_unstable();
        categories.dedup();
        Self { categories }
    }
}

impl GeneratedFile for RootIndex {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn render(&self) -> String {
        CodeFile::new()
            .exports(self.categories.iter().map(|c| Export::all(format!("./{}", c))))
            .render_with_header()
    }
}

/// `<category>/index.ts`, re-exporting each file of the folder.
pub struct CategoryIndex {
    category: &'static str,
    stems: Vec<String>,
}

impl CategoryIndex {
    pub fn new(category: &'static str, stems: impl IntoIterator<Item = String>) -> Self {
        let mut stems: Vec<_> = stems.into_iter().collect();
        stems.sort();
        Self { category, stems }
    }
}

impl GeneratedFile for CategoryIndex {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.category).join("index.ts")
    }

    fn render(&self) -> String {
        CodeFile::new()
            .exports(self.stems.iter().map(|s| Export::all(format!("./{}", s))))
            .render_with_header()
    }
}
