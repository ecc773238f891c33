use std::path::{Path, PathBuf};

use sdkgen_core::GeneratedFile;
use sdkgen_ir::AccountNode;

use super::{RenderContext, borsh_use};
use crate::{
    ast::{Field, Fn, Impl, Param, Struct},
    naming::{field_name, file_name, type_name},
    rust_file::RustFile,
    type_mapper::TypeImports,
};

const ACCOUNT_INFO: &str = "&solana_program::account_info::AccountInfo<'a>";

/// `accounts/<name>.rs`: a borsh struct with its decoding helpers.
pub struct AccountRs<'a> {
    ctx: RenderContext<'a>,
    account: &'a AccountNode,
}

impl<'a> AccountRs<'a> {
    pub fn new(ctx: RenderContext<'a>, account: &'a AccountNode) -> Self {
        Self { ctx, account }
    }

    fn account_struct(&self) -> Struct {
        let mapper = &self.ctx.mapper;
        let discriminator = self
            .account
            .discriminator
            .map(|_| Field::new("discriminator", "u8"));
        let fields = self.account.fields.iter().map(|field| {
            Field::new(field_name(&field.name), mapper.map(&field.ty)).docs(&field.docs)
        });

        Struct::new(type_name(&self.account.name))
            .docs(&self.account.docs)
            .derives(mapper.struct_derives(&self.account.fields))
            .fields(discriminator.into_iter().chain(fields))
    }

    fn inherent_impl(&self, name: &str) -> Impl {
        let mut imp = Impl::new(name);
        if let Some(discriminator) = self.account.discriminator {
            imp = imp.item(format!("pub const DISCRIMINATOR: u8 = {};", discriminator));
        }
        if let Some(len) = self.ctx.root.account_size(self.account) {
            imp = imp.item(format!("pub const LEN: usize = {};", len));
        }

        let from_bytes = Fn::new("from_bytes")
            .attr("inline(always)")
            .param(Param::new("data", "&[u8]"))
            .returns("Result<Self, std::io::Error>")
            .body_line("let mut data = data;");
        let from_bytes = if self.account.discriminator.is_some() {
            from_bytes
                .body_line("let account = Self::deserialize(&mut data)?;")
                .body_line("if account.discriminator != Self::DISCRIMINATOR {")
                .body_line("    return Err(std::io::Error::new(")
                .body_line("        std::io::ErrorKind::InvalidData,")
                .body_line(format!("        \"invalid {} discriminator\",", name))
                .body_line("    ));")
                .body_line("}")
                .body_line("Ok(account)")
        } else {
            from_bytes.body_line("Self::deserialize(&mut data)")
        };

        imp.method(from_bytes)
    }

    fn try_from_impl(&self, name: &str) -> Impl {
        Impl::new(name)
            .generics("'a")
            .for_trait(format!("TryFrom<{}>", ACCOUNT_INFO))
            .item("type Error = std::io::Error;")
            .method(
                Fn::new("try_from")
                    .private()
                    .param(Param::new("account_info", ACCOUNT_INFO))
                    .returns("Result<Self, Self::Error>")
                    .body_line("let data = account_info.data.borrow();")
                    .body_line("Self::from_bytes(&data)"),
            )
    }
}

impl GeneratedFile for AccountRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("accounts")
            .join(format!("{}.rs", file_name(&self.account.name)))
    }

    fn render(&self) -> String {
        let name = type_name(&self.account.name);
        let imports = TypeImports::collect(self.account.fields.iter().map(|f| &f.ty));

        RustFile::new()
            .use_stmt(borsh_use())
            .use_stmts(self.ctx.type_uses(&imports))
            .add(self.account_struct())
            .add(self.inherent_impl(&name))
            .add(self.try_from_impl(&name))
            .render_with_header()
    }
}
