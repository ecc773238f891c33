use std::path::{Path, PathBuf};

use sdkgen_codegen::builder::CodeFragment;
use sdkgen_core::GeneratedFile;
use sdkgen_ir::{FieldNode, InstructionAccountNode, InstructionNode};

use super::{CodecField, PROGRAMS_MODULE, RenderContext, struct_codec_fns, struct_types};
use crate::{
    ast::{Const, Field, Fn, ObjectType, Param},
    code_file::{CodeFile, ImportMap},
    naming::{const_name, field_name, type_name},
    type_mapper::TypeScriptTypeMapper,
};

/// `instructions/<name>.ts`: discriminator, data codecs, and an
/// instruction factory taking accounts and arguments in one input object.
pub struct InstructionTs<'a> {
    ctx: RenderContext<'a>,
    instruction: &'a InstructionNode,
}

fn role(account: &InstructionAccountNode) -> &'static str {
    match (account.is_writable, account.is_signer) {
        (true, true) => "AccountRole.WRITABLE_SIGNER",
        (true, false) => "AccountRole.WRITABLE",
        (false, true) => "AccountRole.READONLY_SIGNER",
        (false, false) => "AccountRole.READONLY",
    }
}

impl<'a> InstructionTs<'a> {
    pub fn new(ctx: RenderContext<'a>, instruction: &'a InstructionNode) -> Self {
        Self { ctx, instruction }
    }

    fn name(&self) -> String {
        type_name(&self.instruction.name)
    }

    fn input_type(&self, imports: &mut ImportMap) -> ObjectType {
        let data_args = format!("{}InstructionDataArgs", self.name());
        let accounts = self.instruction.accounts.iter().map(|account| {
            let ty = if account.is_signer {
                imports.kit_types(["TransactionSigner"]);
                "TransactionSigner"
            } else {
                "Address"
            };
            let field = Field::new(field_name(&account.name), ty).docs(&account.docs);
            if account.is_optional || account.default_address.is_some() {
                field.optional()
            } else {
                field
            }
        });
        let accounts: Vec<Field> = accounts.collect();
        let args = self.instruction.arguments.iter().map(|arg| {
            let name = field_name(&arg.name);
            Field::new(&name, format!("{}[\"{}\"]", data_args, name)).docs(&arg.docs)
        });

        ObjectType::new(format!("{}Input", self.name())).fields(accounts.into_iter().chain(args))
    }

    /// The `{ address, role }` entry for one account.
    fn account_meta(&self, account: &InstructionAccountNode) -> CodeFragment {
        let field = format!("input.{}", field_name(&account.name));
        let key = if account.is_signer {
            format!("{}.address", field)
        } else {
            field.clone()
        };
        let role = role(account);

        let (address, role) = match (&account.default_address, account.is_optional) {
            (Some(default), _) => {
                let key = if account.is_signer {
                    format!("{}?.address", field)
                } else {
                    key
                };
                (
                    format!("{} ?? (\"{}\" as Address<\"{}\">)", key, default, default),
                    role.to_string(),
                )
            }
            (None, true) => {
                let key = if account.is_signer {
                    format!("{}?.address", field)
                } else {
                    key
                };
                let role = if role == "AccountRole.READONLY" {
                    role.to_string()
                } else {
                    format!("{} ? {} : AccountRole.READONLY", field, role)
                };
                (format!("{} ?? {}", key, self.ctx.program_address()), role)
            }
            (None, false) => (key, role.to_string()),
        };

        let signer = if account.is_signer && !account.is_optional && account.default_address.is_none() {
            format!(", signer: {}", field)
        } else {
            String::new()
        };
        CodeFragment::line(format!(
            "{{ address: {}, role: {}{} }},",
            address, role, signer
        ))
    }

    fn instruction_fn(&self, imports: &mut ImportMap) -> Fn {
        let name = self.name();
        imports.kit(["AccountRole"]).kit_types(["Instruction"]);
        imports.add(PROGRAMS_MODULE, self.ctx.program_address());

        let accounts = self
            .instruction
            .accounts
            .iter()
            .map(|account| self.account_meta(account))
            .collect::<Vec<_>>();
        let accounts = if accounts.is_empty() {
            CodeFragment::line("const accounts = [];")
        } else {
            CodeFragment::block_with_close("const accounts = [", accounts, "];")
        };
        let data_input = if self.instruction.has_arguments() { "input" } else { "{}" };

        let f = Fn::new(format!("get{}Instruction", name))
            .param(Param::new("input", format!("{}Input", name)))
            .returns("Instruction")
            .body_fragment(accounts)
            .body_fragment(CodeFragment::Blank)
            .body_fragment(CodeFragment::block_with_close(
                "return {",
                vec![
                    CodeFragment::line(format!("programAddress: {},", self.ctx.program_address())),
                    CodeFragment::line("accounts,"),
                    CodeFragment::line(format!(
                        "data: get{}InstructionDataEncoder().encode({}),",
                        name, data_input
                    )),
                ],
                "};",
            ));
        self.instruction.docs.iter().fold(f, |f, doc| f.doc(doc))
    }
}

impl GeneratedFile for InstructionTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("instructions")
            .join(format!("{}.ts", field_name(&self.instruction.name)))
    }

    fn render(&self) -> String {
        let ix = self.instruction;
        let name = self.name();
        let data_name = format!("{}InstructionData", name);
        let discriminator_const = format!("{}_DISCRIMINATOR", const_name(&ix.name));
        let mut imports = ImportMap::new();

        let arg_fields: Vec<FieldNode> = ix
            .arguments
            .iter()
            .map(|arg| FieldNode {
                name: arg.name.clone(),
                docs: arg.docs.clone(),
                ty: arg.ty.clone(),
            })
            .collect();
        let fields = CodecField::map_all(&arg_fields, TypeScriptTypeMapper::new(), &mut imports);
        let (data, data_args) = struct_types(&data_name, &[], &fields, true);
        let codecs = struct_codec_fns(&data_name, &fields, Some(&discriminator_const), &mut imports);
        let input = self.input_type(&mut imports);
        let instruction = self.instruction_fn(&mut imports);
        imports.kit_types(["Address"]);

        CodeFile::new()
            .add(Const::new(&discriminator_const, ix.discriminator.to_string()))
            .add(data)
            .add(data_args)
            .add_all(codecs)
            .add(input)
            .add(instruction)
            .imports(imports.to_imports())
            .render_with_header()
    }
}
