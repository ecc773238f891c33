use std::path::{Path, PathBuf};

use sdkgen_core::GeneratedFile;

use super::RenderContext;
use crate::rust_file::{RawCode, RustFile, Use};

/// `programs.rs`: the program id constant.
pub struct ProgramsRs<'a> {
    ctx: RenderContext<'a>,
}

impl<'a> ProgramsRs<'a> {
    pub fn new(ctx: RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for ProgramsRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("programs.rs")
    }

    fn render(&self) -> String {
        let program = &self.ctx.root.program;
        RustFile::new()
            .use_stmt(Use::new("solana_program").symbols(["pubkey", "pubkey::Pubkey"]))
            .add(RawCode::lines([
                format!("/// `{}` program ID.", program.name),
                format!(
                    "pub const {}: Pubkey = pubkey!(\"{}\");",
                    self.ctx.program_id_const(),
                    program.public_key
                ),
            ]))
            .render_with_header()
    }
}
