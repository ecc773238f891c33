use std::path::{Path, PathBuf};

use sdkgen_core::GeneratedFile;
use sdkgen_ir::{DefinedTypeKind, DefinedTypeNode};

use super::{RenderContext, borsh_use};
use crate::{
    ast::{Enum, Field, Struct, Variant},
    naming::{field_name, file_name, type_name},
    rust_file::RustFile,
    type_mapper::TypeImports,
};

/// Derives for unit enums, which encode as a single byte.
const ENUM_DERIVES: [&str; 9] = [
    "BorshSerialize",
    "BorshDeserialize",
    "Clone",
    "Copy",
    "Debug",
    "Eq",
    "PartialEq",
    "PartialOrd",
    "Hash",
];

/// `types/<name>.rs`: a shared struct or enum.
pub struct TypeRs<'a> {
    ctx: RenderContext<'a>,
    defined_type: &'a DefinedTypeNode,
}

impl<'a> TypeRs<'a> {
    pub fn new(ctx: RenderContext<'a>, defined_type: &'a DefinedTypeNode) -> Self {
        Self { ctx, defined_type }
    }
}

impl GeneratedFile for TypeRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("types")
            .join(format!("{}.rs", file_name(&self.defined_type.name)))
    }

    fn render(&self) -> String {
        let def = self.defined_type;
        let name = type_name(&def.name);
        let file = RustFile::new().use_stmt(borsh_use());

        let file = match &def.kind {
            DefinedTypeKind::Enum { variants } => {
                let e = variants.iter().fold(
                    Enum::new(&name).docs(&def.docs).derives(ENUM_DERIVES),
                    |e, v| e.variant(Variant::new(type_name(&v.name)).docs(&v.docs)),
                );
                file.add(e)
            }
            DefinedTypeKind::Struct { fields } => {
                let mapper = &self.ctx.mapper;
                let imports =
                    TypeImports::collect(fields.iter().map(|f| &f.ty)).without(&def.name);
                let s = Struct::new(&name)
                    .docs(&def.docs)
                    .derives(mapper.struct_derives(fields))
                    .fields(fields.iter().map(|f| {
                        Field::new(field_name(&f.name), mapper.map(&f.ty)).docs(&f.docs)
                    }));
                file.use_stmts(self.ctx.type_uses(&imports)).add(s)
            }
        };
        file.render_with_header()
    }
}
