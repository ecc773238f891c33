use std::path::{Path, PathBuf};

use sdkgen_core::GeneratedFile;
use sdkgen_ir::AccountNode;

use super::{CodecField, RenderContext, struct_codec_fns, struct_types};
use crate::{
    ast::{Const, Fn, Param},
    code_file::{CodeFile, ImportMap},
    naming::{const_name, field_name, type_name},
    type_mapper::TypeScriptTypeMapper,
};

const ADDRESS_GENERIC: &str = "TAddress extends string = string";

/// `accounts/<name>.ts`: the account type, codecs, and decode/fetch helpers.
pub struct AccountTs<'a> {
    ctx: RenderContext<'a>,
    account: &'a AccountNode,
}

impl<'a> AccountTs<'a> {
    pub fn new(ctx: RenderContext<'a>, account: &'a AccountNode) -> Self {
        Self { ctx, account }
    }

    fn helpers(&self, name: &str, imports: &mut ImportMap) -> Vec<Fn> {
        imports
            .kit(["assertAccountExists", "decodeAccount", "fetchEncodedAccount"])
            .kit_types(["Account", "Address", "EncodedAccount", "FetchAccountConfig"]);

        let mut fns = vec![
            Fn::new(format!("decode{}", name))
                .generics(ADDRESS_GENERIC)
                .param(Param::new("encodedAccount", "EncodedAccount<TAddress>"))
                .returns(format!("Account<{}, TAddress>", name))
                .body_line(format!(
                    "return decodeAccount(encodedAccount, get{}Decoder());",
                    name
                )),
            Fn::new(format!("fetch{}", name))
                .async_()
                .generics(ADDRESS_GENERIC)
                .param(Param::new("rpc", "Parameters<typeof fetchEncodedAccount>[0]"))
                .param(Param::new("address", "Address<TAddress>"))
                .param(Param::new("config", "FetchAccountConfig").optional())
                .returns(format!("Promise<Account<{}, TAddress>>", name))
                .body_line("const maybeAccount = await fetchEncodedAccount(rpc, address, config);")
                .body_line("assertAccountExists(maybeAccount);")
                .body_line(format!("return decode{}(maybeAccount);", name)),
        ];

        if let Some(size) = self.ctx.root.account_size(self.account) {
            fns.push(
                Fn::new(format!("get{}Size", name))
                    .returns("number")
                    .body_line(format!("return {};", size)),
            );
        }
        fns
    }
}

impl GeneratedFile for AccountTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("accounts")
            .join(format!("{}.ts", field_name(&self.account.name)))
    }

    fn render(&self) -> String {
        let account = self.account;
        let name = type_name(&account.name);
        let discriminator_const = format!("{}_DISCRIMINATOR", const_name(&account.name));
        let mut imports = ImportMap::new();

        let fields = CodecField::map_all(&account.fields, TypeScriptTypeMapper::new(), &mut imports);
        let (decoded, args) = struct_types(
            &name,
            &account.docs,
            &fields,
            account.discriminator.is_some(),
        );
        let codecs = struct_codec_fns(
            &name,
            &fields,
            account.discriminator.map(|_| discriminator_const.as_str()),
            &mut imports,
        );
        let helpers = self.helpers(&name, &mut imports);

        let file = CodeFile::new();
        let file = match account.discriminator {
            Some(discriminator) => {
                file.add(Const::new(&discriminator_const, discriminator.to_string()))
            }
            None => file,
        };
        file.add(decoded)
            .add(args)
            .add_all(codecs)
            .add_all(helpers)
            .imports(imports.to_imports())
            .render_with_header()
    }
}
