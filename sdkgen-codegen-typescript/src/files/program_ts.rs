use std::path::{Path, PathBuf};

use sdkgen_core::GeneratedFile;

use super::RenderContext;
use crate::{
    ast::{Import, TsEnum},
    code_file::{CodeFile, KIT, RawCode},
    naming::type_name,
};

/// `programs/<program>.ts`: the program address and an instruction
/// discriminator enum.
pub struct ProgramTs<'a> {
    ctx: RenderContext<'a>,
}

impl<'a> ProgramTs<'a> {
    pub fn new(ctx: RenderContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for ProgramTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("programs")
            .join(format!("{}.ts", self.ctx.program_file()))
    }

    fn render(&self) -> String {
        let program = &self.ctx.root.program;
        let file = CodeFile::new()
            .import(Import::new(KIT).named("type Address"))
            .add(RawCode::new(format!(
                "export const {} = \"{}\" as Address<\"{}\">;",
                self.ctx.program_address(),
                program.public_key,
                program.public_key
            )));

        if program.instructions.is_empty() {
            return file.render_with_header();
        }
        let instructions = program.instructions.iter().fold(
            TsEnum::new(format!("{}Instruction", type_name(&program.name))),
            |e, ix| e.member_with_value(type_name(&ix.name), ix.discriminator.to_string()),
        );
        file.add(instructions).render_with_header()
    }
}
