use std::path::{Path, PathBuf};

use sdkgen_core::GeneratedFile;
use sdkgen_ir::{DefinedTypeKind, DefinedTypeNode};

use super::{CodecField, struct_codec_fns, struct_types};
use crate::{
    ast::{Fn, TsEnum, TypeAlias},
    code_file::{CodeFile, ImportMap},
    naming::{field_name, type_name},
    type_mapper::TypeScriptTypeMapper,
};

/// `types/<name>.ts`: a shared struct or enum with its codecs.
pub struct TypeTs<'a> {
    defined_type: &'a DefinedTypeNode,
}

impl<'a> TypeTs<'a> {
    pub fn new(defined_type: &'a DefinedTypeNode) -> Self {
        Self { defined_type }
    }
}

impl GeneratedFile for TypeTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("types")
            .join(format!("{}.ts", field_name(&self.defined_type.name)))
    }

    fn render(&self) -> String {
        let def = self.defined_type;
        let name = type_name(&def.name);
        let mut imports = ImportMap::new();

        let body = match &def.kind {
            DefinedTypeKind::Enum { variants } => {
                imports
                    .kit(["combineCodec", "getEnumDecoder", "getEnumEncoder"])
                    .kit_types(["Codec", "Decoder", "Encoder"]);
                let e = variants.iter().fold(
                    TsEnum::new(&name).docs(&def.docs),
                    |e, v| e.member(type_name(&v.name)),
                );
                let codecs = [
                    Fn::new(format!("get{}Encoder", name))
                        .returns(format!("Encoder<{}Args>", name))
                        .body_line(format!("return getEnumEncoder({});", name)),
                    Fn::new(format!("get{}Decoder", name))
                        .returns(format!("Decoder<{}>", name))
                        .body_line(format!("return getEnumDecoder({});", name)),
                    Fn::new(format!("get{}Codec", name))
                        .returns(format!("Codec<{}Args, {}>", name, name))
                        .body_line(format!(
                            "return combineCodec(get{}Encoder(), get{}Decoder());",
                            name, name
                        )),
                ];
                CodeFile::new()
                    .add(e)
                    .add(TypeAlias::new(format!("{}Args", name), &name))
                    .add_all(codecs)
            }
            DefinedTypeKind::Struct { fields } => {
                let fields =
                    CodecField::map_all(fields, TypeScriptTypeMapper::for_types_folder(), &mut imports);
                let (decoded, args) = struct_types(&name, &def.docs, &fields, false);
                let codecs = struct_codec_fns(&name, &fields, None, &mut imports);
                CodeFile::new().add(decoded).add(args).add_all(codecs)
            }
        };

        body.imports(imports.to_imports()).render_with_header()
    }
}
