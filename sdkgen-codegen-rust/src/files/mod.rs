//! Generated Rust files, one type per file kind.
//!
//! Paths are relative to the generated module directory
//! (`sdk/rust/src/generated` by default).

mod account_rs;
mod cargo_toml;
mod errors_rs;
mod instruction_rs;
mod mod_rs;
mod programs_rs;
mod type_rs;

pub use account_rs::AccountRs;
pub use cargo_toml::{CargoToml, Dependency};
pub use errors_rs::ErrorsRs;
pub use instruction_rs::InstructionRs;
pub use mod_rs::{CategoryMod, GeneratedMod};
pub use programs_rs::ProgramsRs;
pub use type_rs::TypeRs;

use sdkgen_ir::RootNode;

use crate::{
    naming::{const_name, type_name},
    rust_file::Use,
    type_mapper::{RustTypeMapper, TypeImports},
};

/// Everything a file needs to know about the program it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub root: &'a RootNode,
    pub mapper: RustTypeMapper<'a>,
    /// Path of the generated module inside the client crate, e.g. `crate::generated`
    pub module_path: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(root: &'a RootNode, module_path: &'a str) -> Self {
        Self {
            root,
            mapper: RustTypeMapper::new(root),
            module_path,
        }
    }

    /// Name of the program id constant, e.g. `ABL_ID`.
    pub fn program_id_const(&self) -> String {
        format!("{}_ID", const_name(&self.root.program.name))
    }

    /// Full path to the program id constant.
    pub fn program_id(&self) -> String {
        format!("{}::programs::{}", self.module_path, self.program_id_const())
    }

    /// Imports for the types a file mentions.
    pub fn type_uses(&self, imports: &TypeImports) -> Vec<Use> {
        let mut uses = Vec::new();
        if imports.pubkey {
            uses.push(Use::new("solana_program::pubkey").symbol("Pubkey"));
        }
        if !imports.defined.is_empty() {
            uses.push(
                Use::new(format!("{}::types", self.module_path))
                    .symbols(imports.defined.iter().map(|name| type_name(name))),
            );
        }
        uses
    }
}

/// `use borsh::{BorshDeserialize, BorshSerialize};`
fn borsh_use() -> Use {
    Use::new("borsh").symbols(["BorshDeserialize", "BorshSerialize"])
}
