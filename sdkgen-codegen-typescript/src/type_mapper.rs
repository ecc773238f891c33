//! TypeScript type mapper implementation.
//!
//! Every IR type maps to a decoded type, a looser "args" type accepted by
//! encoders, and the `@solana/kit` encoder and decoder expressions for its
//! borsh layout.

use sdkgen_ir::{NumberFormat, TypeNode};

use crate::{code_file::ImportMap, naming::type_name};

/// Module the shared types are imported from, relative to a category folder.
pub const TYPES_MODULE: &str = "../types";

/// A mapped type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsType {
    /// Type produced by the decoder
    pub ty: String,
    /// Type accepted by the encoder
    pub args: String,
    pub encoder: String,
    pub decoder: String,
}

/// Maps IR types to TypeScript types and codecs, recording the imports
/// they need.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptTypeMapper {
    /// Import defined types from `../types`, or from `.` inside the types folder
    types_module: &'static str,
}

impl Default for TypeScriptTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeScriptTypeMapper {
    pub fn new() -> Self {
        Self {
            types_module: TYPES_MODULE,
        }
    }

    /// Mapper for files inside `types/`, which import siblings from `.`.
    pub fn for_types_folder() -> Self {
        Self { types_module: "." }
    }

    pub fn map(&self, ty: &TypeNode, imports: &mut ImportMap) -> TsType {
        match ty {
            TypeNode::Boolean => {
                imports.kit(["getBooleanEncoder", "getBooleanDecoder"]);
                simple("boolean", "getBooleanEncoder()", "getBooleanDecoder()")
            }
            TypeNode::Number(format) => {
                let suffix = number_suffix(*format);
                let encoder = format!("get{}Encoder", suffix);
                let decoder = format!("get{}Decoder", suffix);
                imports.add(crate::code_file::KIT, &encoder);
                imports.add(crate::code_file::KIT, &decoder);
                let (ty, args) = if format.is_big() {
                    ("bigint", "number | bigint")
                } else {
                    ("number", "number")
                };
                TsType {
                    ty: ty.to_string(),
                    args: args.to_string(),
                    encoder: format!("{}()", encoder),
                    decoder: format!("{}()", decoder),
                }
            }
            TypeNode::String => {
                imports.kit([
                    "addDecoderSizePrefix",
                    "addEncoderSizePrefix",
                    "getU32Decoder",
                    "getU32Encoder",
                    "getUtf8Decoder",
                    "getUtf8Encoder",
                ]);
                simple(
                    "string",
                    "addEncoderSizePrefix(getUtf8Encoder(), getU32Encoder())",
                    "addDecoderSizePrefix(getUtf8Decoder(), getU32Decoder())",
                )
            }
            TypeNode::PublicKey => {
                imports.kit(["getAddressDecoder", "getAddressEncoder"]);
                imports.kit_types(["Address"]);
                simple("Address", "getAddressEncoder()", "getAddressDecoder()")
            }
            TypeNode::Bytes => {
                imports.kit([
                    "addDecoderSizePrefix",
                    "addEncoderSizePrefix",
                    "getBytesDecoder",
                    "getBytesEncoder",
                    "getU32Decoder",
                    "getU32Encoder",
                ]);
                imports.kit_types(["ReadonlyUint8Array"]);
                simple(
                    "ReadonlyUint8Array",
                    "addEncoderSizePrefix(getBytesEncoder(), getU32Encoder())",
                    "addDecoderSizePrefix(getBytesDecoder(), getU32Decoder())",
                )
            }
            TypeNode::Option(inner) => {
                let inner = self.map(inner, imports);
                imports.kit(["getOptionDecoder", "getOptionEncoder"]);
                imports.kit_types(["Option", "OptionOrNullable"]);
                TsType {
                    ty: format!("Option<{}>", inner.ty),
                    args: format!("OptionOrNullable<{}>", inner.args),
                    encoder: format!("getOptionEncoder({})", inner.encoder),
                    decoder: format!("getOptionDecoder({})", inner.decoder),
                }
            }
            TypeNode::Vec(inner) => {
                let inner = self.map(inner, imports);
                imports.kit(["getArrayDecoder", "getArrayEncoder"]);
                TsType {
                    ty: format!("Array<{}>", inner.ty),
                    args: format!("Array<{}>", inner.args),
                    encoder: format!("getArrayEncoder({})", inner.encoder),
                    decoder: format!("getArrayDecoder({})", inner.decoder),
                }
            }
            TypeNode::Array(inner, len) => {
                let inner = self.map(inner, imports);
                imports.kit(["getArrayDecoder", "getArrayEncoder"]);
                TsType {
                    ty: format!("Array<{}>", inner.ty),
                    args: format!("Array<{}>", inner.args),
                    encoder: format!("getArrayEncoder({}, {{ size: {} }})", inner.encoder, len),
                    decoder: format!("getArrayDecoder({}, {{ size: {} }})", inner.decoder, len),
                }
            }
            TypeNode::Defined(name) => {
                let name = type_name(name);
                let encoder = format!("get{}Encoder", name);
                let decoder = format!("get{}Decoder", name);
                imports
                    .add(self.types_module, &decoder)
                    .add(self.types_module, &encoder)
                    .add_type(self.types_module, &name)
                    .add_type(self.types_module, format!("{}Args", name));
                TsType {
                    args: format!("{}Args", name),
                    encoder: format!("{}()", encoder),
                    decoder: format!("{}()", decoder),
                    ty: name,
                }
            }
        }
    }
}

fn simple(ty: &str, encoder: &str, decoder: &str) -> TsType {
    TsType {
        ty: ty.to_string(),
        args: ty.to_string(),
        encoder: encoder.to_string(),
        decoder: decoder.to_string(),
    }
}

/// `u64` → `U64`, as in `getU64Encoder`.
fn number_suffix(format: NumberFormat) -> String {
    format.as_str().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_numbers() {
        let mapper = TypeScriptTypeMapper::new();
        let mut imports = ImportMap::new();

        let small = mapper.map(&TypeNode::Number(NumberFormat::U8), &mut imports);
        assert_eq!(small.ty, "number");
        assert_eq!(small.encoder, "getU8Encoder()");

        let big = mapper.map(&TypeNode::Number(NumberFormat::U64), &mut imports);
        assert_eq!(big.ty, "bigint");
        assert_eq!(big.args, "number | bigint");
        assert_eq!(big.decoder, "getU64Decoder()");
    }

    #[test]
    fn test_map_nested() {
        let mapper = TypeScriptTypeMapper::new();
        let mut imports = ImportMap::new();
        let ty = TypeNode::option(TypeNode::array(TypeNode::Defined("mode".into()), 4));

        let mapped = mapper.map(&ty, &mut imports);
        assert_eq!(mapped.ty, "Option<Array<Mode>>");
        assert_eq!(mapped.args, "OptionOrNullable<Array<ModeArgs>>");
        assert_eq!(
            mapped.encoder,
            "getOptionEncoder(getArrayEncoder(getModeEncoder(), { size: 4 }))"
        );

        let rendered: Vec<String> = imports
            .to_imports()
            .iter()
            .map(crate::ast::Import::build)
            .collect();
        assert_eq!(
            rendered[1],
            "import { getModeDecoder, getModeEncoder, type Mode, type ModeArgs } from \"../types\";\n"
        );
    }

    #[test]
    fn test_types_folder_imports_siblings() {
        let mut imports = ImportMap::new();
        TypeScriptTypeMapper::for_types_folder()
            .map(&TypeNode::Defined("mode".into()), &mut imports);
        let rendered: Vec<String> = imports
            .to_imports()
            .iter()
            .map(crate::ast::Import::build)
            .collect();
        assert_eq!(
            rendered,
            ["import { getModeDecoder, getModeEncoder, type Mode, type ModeArgs } from \".\";\n"]
        );
    }
}
