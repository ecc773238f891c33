use std::path::{Path, PathBuf};

use sdkgen_codegen::builder::CodeFragment;
use sdkgen_core::GeneratedFile;
use sdkgen_ir::{InstructionAccountNode, InstructionNode};

use super::{RenderContext, borsh_use};
use crate::{
    ast::{Field, Fn, Impl, Param, Struct},
    naming::{field_name, file_name, type_name},
    rust_file::{RustFile, Use},
    type_mapper::TypeImports,
};

/// `instructions/<name>.rs`: the accounts struct, instruction data and
/// args, and a builder.
pub struct InstructionRs<'a> {
    ctx: RenderContext<'a>,
    instruction: &'a InstructionNode,
}

/// How an account is supplied to the instruction.
enum AccountKind<'n> {
    Required,
    /// May be omitted; the program id is passed in its place
    Optional,
    /// Falls back to a fixed address
    Defaulted(&'n str),
}

fn account_kind(account: &InstructionAccountNode) -> AccountKind<'_> {
    match (&account.default_address, account.is_optional) {
        (Some(address), _) => AccountKind::Defaulted(address),
        (None, true) => AccountKind::Optional,
        (None, false) => AccountKind::Required,
    }
}

impl<'a> InstructionRs<'a> {
    pub fn new(ctx: RenderContext<'a>, instruction: &'a InstructionNode) -> Self {
        Self { ctx, instruction }
    }

    fn name(&self) -> String {
        type_name(&self.instruction.name)
    }

    /// Builder field for an argument, suffixed when an account has the same name.
    fn arg_field(&self, arg_name: &str) -> String {
        let collides = self.instruction.accounts.iter().any(|a| a.name == arg_name);
        if collides {
            field_name(&format!("{}Arg", arg_name))
        } else {
            field_name(arg_name)
        }
    }

    fn accounts_struct(&self) -> Struct {
        let fields = self.instruction.accounts.iter().map(|account| {
            let ty = match account_kind(account) {
                AccountKind::Optional => "Option<Pubkey>",
                AccountKind::Required | AccountKind::Defaulted(_) => "Pubkey",
            };
            Field::new(field_name(&account.name), ty).docs(&account.docs)
        });
        Struct::new(self.name())
            .docs(&self.instruction.docs)
            .derive("Debug")
            .fields(fields)
    }

    fn account_meta(account: &InstructionAccountNode, key: &str) -> String {
        let constructor = if account.is_writable { "new" } else { "new_readonly" };
        format!(
            "accounts.push(AccountMeta::{}({}, {}));",
            constructor, key, account.is_signer
        )
    }

    fn instruction_fn(&self) -> Fn {
        let ix = self.instruction;
        let mut f = Fn::new("instruction")
            .param(Param::new("&self", ""))
            .returns("Instruction");
        if ix.has_arguments() {
            f = f.param(Param::new(
                "args",
                format!("{}InstructionArgs", self.name()),
            ));
        }

        let accounts = if ix.accounts.is_empty() { "let accounts" } else { "let mut accounts" };
        f = f.body_line(format!(
            "{} = Vec::with_capacity({});",
            accounts,
            ix.accounts.len()
        ));

        for account in &ix.accounts {
            let field = field_name(&account.name);
            f = match account_kind(account) {
                AccountKind::Optional => f
                    .body_fragment(CodeFragment::Block {
                        header: format!("if let Some({}) = self.{} {{", field, field),
                        body: vec![CodeFragment::line(Self::account_meta(account, &field))],
                        close: None,
                    })
                    .body_fragment(CodeFragment::block(
                        "} else {",
                        vec![CodeFragment::line(format!(
                            "accounts.push(AccountMeta::new_readonly({}, false));",
                            self.ctx.program_id()
                        ))],
                    )),
                AccountKind::Required | AccountKind::Defaulted(_) => {
                    f.body_line(Self::account_meta(account, &format!("self.{}", field)))
                }
            };
        }

        f = f.body_line(format!(
            "{} = borsh::to_vec(&{}InstructionData::new()).unwrap();",
            if ix.has_arguments() { "let mut data" } else { "let data" },
            self.name()
        ));
        if ix.has_arguments() {
            f = f
                .body_line("let mut args = borsh::to_vec(&args).unwrap();")
                .body_line("data.append(&mut args);");
        }

        f.body_fragment(CodeFragment::Blank).body_fragment(CodeFragment::block(
            "Instruction {",
            vec![
                CodeFragment::line(format!("program_id: {},", self.ctx.program_id())),
                CodeFragment::line("accounts,"),
                CodeFragment::line("data,"),
            ],
        ))
    }

    fn data_struct(&self) -> (Struct, Impl, Impl) {
        let name = format!("{}InstructionData", self.name());
        let s = Struct::new(&name)
            .derives(["BorshSerialize", "BorshDeserialize", "Clone", "Debug", "Eq", "PartialEq"])
            .field(Field::new("discriminator", "u8").private());
        let new = Impl::new(&name).method(
            Fn::new("new").returns("Self").body_line(format!(
                "Self {{ discriminator: {} }}",
                self.instruction.discriminator
            )),
        );
        let default = Impl::new(&name).for_trait("Default").method(
            Fn::new("default")
                .private()
                .returns("Self")
                .body_line("Self::new()"),
        );
        (s, new, default)
    }

    fn args_struct(&self) -> Struct {
        let mapper = &self.ctx.mapper;
        let args = &self.instruction.arguments;
        let fields = args.iter().map(|arg| {
            Field::new(field_name(&arg.name), mapper.map(&arg.ty)).docs(&arg.docs)
        });
        let arg_fields: Vec<_> = args
            .iter()
            .map(|arg| sdkgen_ir::FieldNode {
                name: arg.name.clone(),
                docs: Vec::new(),
                ty: arg.ty.clone(),
            })
            .collect();
        Struct::new(format!("{}InstructionArgs", self.name()))
            .derives(mapper.struct_derives(&arg_fields))
            .fields(fields)
    }

    fn builder_struct(&self) -> Struct {
        let mapper = &self.ctx.mapper;
        let accounts = self
            .instruction
            .accounts
            .iter()
            .map(|a| Field::new(field_name(&a.name), "Option<Pubkey>").private());
        let args = self.instruction.arguments.iter().map(|arg| {
            Field::new(
                self.arg_field(&arg.name),
                format!("Option<{}>", mapper.map(&arg.ty)),
            )
            .private()
        });
        Struct::new(format!("{}Builder", self.name()))
            .docs(&[format!("Builds a [`{}`] instruction.", self.name())])
            .derives(["Clone", "Debug", "Default"])
            .fields(accounts.chain(args))
    }

    fn builder_impl(&self) -> Impl {
        let mapper = &self.ctx.mapper;
        let name = self.name();
        let mut imp = Impl::new(format!("{}Builder", name))
            .method(Fn::new("new").returns("Self").body_line("Self::default()"));

        for account in &self.instruction.accounts {
            let field = field_name(&account.name);
            let (doc, ty, value) = match account_kind(account) {
                AccountKind::Required => (None, "Pubkey", format!("Some({})", field)),
                AccountKind::Optional => {
                    (Some("`[optional account]`".to_string()), "Option<Pubkey>", field.clone())
                }
                AccountKind::Defaulted(address) => (
                    Some(format!("`[optional account, default to '{}']`", address)),
                    "Pubkey",
                    format!("Some({})", field),
                ),
            };
            let mut setter = Fn::new(&field)
                .attr("inline(always)")
                .param(Param::new("&mut self", ""))
                .param(Param::new(&field, ty))
                .returns("&mut Self")
                .body_line(format!("self.{} = {};", field, value))
                .body_line("self");
            if let Some(doc) = doc {
                setter = setter.doc(doc);
            }
            imp = imp.method(setter);
        }

        for arg in &self.instruction.arguments {
            let field = self.arg_field(&arg.name);
            imp = imp.method(
                Fn::new(&field)
                    .attr("inline(always)")
                    .param(Param::new("&mut self", ""))
                    .param(Param::new(&field, mapper.map(&arg.ty)))
                    .returns("&mut Self")
                    .body_line(format!("self.{} = Some({});", field, field))
                    .body_line("self"),
            );
        }

        imp.method(self.build_fn())
    }

    fn build_fn(&self) -> Fn {
        let name = self.name();
        let account_values = self.instruction.accounts.iter().map(|account| {
            let field = field_name(&account.name);
            let value = match account_kind(account) {
                AccountKind::Required => {
                    format!("self.{}.expect(\"{} is not set\")", field, field)
                }
                AccountKind::Optional => format!("self.{}", field),
                AccountKind::Defaulted(address) => format!(
                    "self.{}.unwrap_or(solana_program::pubkey!(\"{}\"))",
                    field, address
                ),
            };
            CodeFragment::line(format!("{}: {},", field, value))
        });

        let mut f = Fn::new("instruction")
            .param(Param::new("&self", ""))
            .returns("Instruction")
            .body_fragment(CodeFragment::block_with_close(
                format!("let accounts = {} {{", name),
                account_values.collect(),
                "};",
            ));

        if !self.instruction.has_arguments() {
            return f.body_line("accounts.instruction()");
        }

        let arg_values = self.instruction.arguments.iter().map(|arg| {
            let field = self.arg_field(&arg.name);
            CodeFragment::line(format!(
                "{}: self.{}.clone().expect(\"{} is not set\"),",
                field_name(&arg.name),
                field,
                field
            ))
        });
        f = f.body_fragment(CodeFragment::block_with_close(
            format!("let args = {}InstructionArgs {{", name),
            arg_values.collect(),
            "};",
        ));
        f.body_fragment(CodeFragment::Blank)
            .body_line("accounts.instruction(args)")
    }

    fn uses(&self) -> Vec<Use> {
        let ix = self.instruction;
        let mut imports = TypeImports::collect(ix.arguments.iter().map(|a| &a.ty));
        imports.pubkey |= !ix.accounts.is_empty();

        let instruction = if ix.accounts.is_empty() {
            Use::new("solana_program::instruction").symbol("Instruction")
        } else {
            Use::new("solana_program::instruction").symbols(["AccountMeta", "Instruction"])
        };
        let mut uses = vec![borsh_use(), instruction];
        uses.extend(self.ctx.type_uses(&imports));
        uses
    }
}

impl GeneratedFile for InstructionRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("instructions")
            .join(format!("{}.rs", file_name(&self.instruction.name)))
    }

    fn render(&self) -> String {
        let (data, data_new, data_default) = self.data_struct();
        let file = RustFile::new()
            .use_stmts(self.uses())
            .add(self.accounts_struct())
            .add(Impl::new(self.name()).method(self.instruction_fn()))
            .add(data)
            .add(data_new)
            .add(data_default);
        let file = if self.instruction.has_arguments() {
            file.add(self.args_struct())
        } else {
            file
        };
        file.add(self.builder_struct())
            .add(self.builder_impl())
            .render_with_header()
    }
}
