use std::path::{Path, PathBuf};

use sdkgen_core::GeneratedFile;
use sdkgen_ir::ErrorNode;

use super::RenderContext;
use crate::{
    ast::{Enum, Fn, Impl, Param, Variant},
    naming::{file_name, type_name},
    rust_file::{RustFile, Use},
};

const PROGRAM_ERROR: &str = "solana_program::program_error::ProgramError";

/// `errors/<program>.rs`: the program's custom errors as a thiserror enum.
pub struct ErrorsRs<'a> {
    ctx: RenderContext<'a>,
    errors: &'a [ErrorNode],
}

impl<'a> ErrorsRs<'a> {
    pub fn new(ctx: RenderContext<'a>, errors: &'a [ErrorNode]) -> Self {
        Self { ctx, errors }
    }

    /// Enum name, e.g. `AblError`.
    pub fn enum_name(&self) -> String {
        format!("{}Error", type_name(&self.ctx.root.program.name))
    }

    /// Module name, e.g. `abl`.
    pub fn module_name(&self) -> String {
        file_name(&self.ctx.root.program.name)
    }
}

/// Quote a message for `#[error(...)]`, escaping format braces.
fn error_literal(message: &str) -> String {
    format!("{:?}", message.replace('{', "{{").replace('}', "}}"))
}

impl GeneratedFile for ErrorsRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("errors")
            .join(format!("{}.rs", self.module_name()))
    }

    fn render(&self) -> String {
        let name = self.enum_name();
        let errors = self.errors.iter().fold(
            Enum::new(&name).derives(["Clone", "Debug", "Eq", "Error", "FromPrimitive", "PartialEq"]),
            |e, error| {
                let message = error.display_message();
                e.variant(
                    Variant::new(type_name(&error.name))
                        .docs(&[format!("{} - {}", error.code, message)])
                        .attr(format!("error({})", error_literal(message)))
                        .value(format!("{:#x}", error.code)),
                )
            },
        );

        let into_program_error = Impl::new(PROGRAM_ERROR)
            .for_trait(format!("From<{}>", name))
            .method(
                Fn::new("from")
                    .private()
                    .param(Param::new("e", &name))
                    .returns("Self")
                    .body_line(format!("{}::Custom(e as u32)", PROGRAM_ERROR)),
            );

        RustFile::new()
            .use_stmt(Use::new("num_derive").symbol("FromPrimitive"))
            .use_stmt(Use::new("thiserror").symbol("Error"))
            .add(errors)
            .add(into_program_error)
            .render_with_header()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_literal_escapes() {
        assert_eq!(error_literal("Invalid data"), "\"Invalid data\"");
        assert_eq!(error_literal("bad {seed}"), "\"bad {{seed}}\"");
        assert_eq!(error_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
