use std::path::{Path, PathBuf};

use sdkgen_core::GeneratedFile;

use crate::rust_file::{RawCode, RustFile};

/// Root `mod.rs` of the generated module.
pub struct GeneratedMod {
    /// Category modules present, e.g. `accounts`, `programs`
    modules: Vec<&'static str>,
}

impl GeneratedMod {
    pub fn new(mut modules: Vec<&'static str>) -> Self {
        modules.sort_unstable();
        Self { modules }
    }
}

impl GeneratedFile for GeneratedMod {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("mod.rs")
    }

    fn render(&self) -> String {
        RustFile::new()
            .add(RawCode::lines(
                self.modules.iter().map(|m| format!("pub mod {};", m)),
            ))
            .add(RawCode::new("pub(crate) use programs::*;"))
            .render_with_header()
    }
}

/// `mod.rs` of one category folder, re-exporting every item.
pub struct CategoryMod {
    category: &'static str,
    /// Module identifiers, escaped where needed (`r#type`)
    modules: Vec<String>,
}

impl CategoryMod {
    pub fn new(category: &'static str, modules: Vec<String>) -> Self {
        Self { category, modules }
    }
}

impl GeneratedFile for CategoryMod {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.category).join("mod.rs")
    }

    fn render(&self) -> String {
        RustFile::new()
            .add(RawCode::lines(
                self.modules
                    .iter()
                    .map(|module| format!("pub(crate) mod {};", module)),
            ))
            .add(RawCode::lines(
                self.modules
                    .iter()
                    .map(|module| format!("pub use self::{}::*;", module)),
            ))
            .render_with_header()
    }
}
