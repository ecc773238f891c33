use std::path::{Path, PathBuf};

use sdkgen_codegen::builder::CodeFragment;
use sdkgen_core::GeneratedFile;
use sdkgen_ir::ErrorNode;

use super::{PROGRAMS_MODULE, RenderContext};
use crate::{
    ast::{Const, Fn, Param, TypeAlias},
    code_file::{CodeFile, ImportMap},
    naming::{const_name, field_name, type_name},
};

/// `errors/<program>.ts`: error code constants, messages and a type guard.
pub struct ErrorsTs<'a> {
    ctx: RenderContext<'a>,
}

impl<'a> ErrorsTs<'a> {
    pub fn new(ctx: RenderContext<'a>) -> Self {
        Self { ctx }
    }

    fn code_const(&self, error: &ErrorNode) -> String {
        format!(
            "{}_ERROR__{}",
            const_name(&self.ctx.root.program.name),
            const_name(&error.name)
        )
    }
}

/// A JS string literal; JSON escaping is valid here.
fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

impl GeneratedFile for ErrorsTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("errors")
            .join(format!("{}.ts", self.ctx.program_file()))
    }

    fn render(&self) -> String {
        let program = &self.ctx.root.program;
        let error_type = format!("{}Error", type_name(&program.name));
        let messages = format!("{}ErrorMessages", field_name(&program.name));

        let mut imports = ImportMap::new();
        imports.kit(["isProgramError"]).kit_types([
            "Address",
            "SOLANA_ERROR__INSTRUCTION_ERROR__CUSTOM",
            "SolanaError",
        ]);
        imports.add(PROGRAMS_MODULE, self.ctx.program_address());

        let codes = program.errors.iter().map(|error| {
            Const::new(self.code_const(error), format!("0x{:x}", error.code))
                .doc(format!("{}: {}", type_name(&error.name), error.display_message()))
        });

        let union = program
            .errors
            .iter()
            .map(|error| format!("typeof {}", self.code_const(error)))
            .collect::<Vec<_>>()
            .join(" | ");

        let entries = program
            .errors
            .iter()
            .map(|error| {
                CodeFragment::line(format!(
                    "[{}]: {},",
                    self.code_const(error),
                    string_literal(error.display_message())
                ))
            })
            .collect();
        let table = CodeFragment::block_with_close(
            format!("const {}: Record<{}, string> = {{", messages, error_type),
            entries,
            "};",
        );

        let get_message = Fn::new(format!("get{}Message", error_type))
            .param(Param::new("code", &error_type))
            .returns("string")
            .body_line(format!("return {}[code];", messages));

        let is_error = Fn::new(format!("is{}", error_type))
            .doc(format!(
                "Whether `error` is a custom program error raised by the {} program.",
                program.name
            ))
            .generics(format!("TProgramErrorCode extends {}", error_type))
            .param(Param::new("error", "unknown"))
            .param(Param::new(
                "transactionMessage",
                "{ instructions: Record<number, { programAddress: Address }> }",
            ))
            .param(Param::new("code", "TProgramErrorCode").optional())
            .returns(
                "error is SolanaError<typeof SOLANA_ERROR__INSTRUCTION_ERROR__CUSTOM> & \
                 Readonly<{ context: Readonly<{ code: TProgramErrorCode }> }>",
            )
            .body_line(format!(
                "return isProgramError<TProgramErrorCode>(error, transactionMessage, {}, code);",
                self.ctx.program_address()
            ));

        CodeFile::new()
            .add_all(codes)
            .add(TypeAlias::new(&error_type, union))
            .add(table)
            .add(get_message)
            .add(is_error)
            .imports(imports.to_imports())
            .render_with_header()
    }
}
