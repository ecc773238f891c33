//! Generated TypeScript files, one type per file kind.
//!
//! Paths are relative to the generated directory
//! (`sdk/ts/src/generated` by default).

mod account_ts;
mod errors_ts;
mod index_ts;
mod instruction_ts;
mod package_json;
mod program_ts;
mod type_ts;

pub use account_ts::AccountTs;
pub use errors_ts::ErrorsTs;
pub use index_ts::{CategoryIndex, RootIndex};
pub use instruction_ts::InstructionTs;
pub use package_json::{KIT_VERSION, PackageJson};
pub use program_ts::ProgramTs;
pub use type_ts::TypeTs;

use sdkgen_codegen::builder::CodeFragment;
use sdkgen_ir::{FieldNode, RootNode};

use crate::{
    ast::{Field, Fn, ObjectType},
    code_file::ImportMap,
    naming::{const_name, field_name},
    type_mapper::{TsType, TypeScriptTypeMapper},
};

/// Module the program address is imported from, relative to a category folder.
const PROGRAMS_MODULE: &str = "../programs";

/// Everything a file needs to know about the program it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub root: &'a RootNode,
}

impl<'a> RenderContext<'a> {
    pub fn new(root: &'a RootNode) -> Self {
        Self { root }
    }

    /// Name of the program address constant, e.g. `ABL_PROGRAM_ADDRESS`.
    pub fn program_address(&self) -> String {
        format!("{}_PROGRAM_ADDRESS", const_name(&self.root.program.name))
    }

    /// File stem of the program module, e.g. `abl`.
    pub fn program_file(&self) -> String {
        field_name(&self.root.program.name)
    }
}

/// A field of a borsh struct, already mapped.
struct CodecField {
    name: String,
    docs: Vec<String>,
    ty: TsType,
}

impl CodecField {
    fn map_all(fields: &[FieldNode], mapper: TypeScriptTypeMapper, imports: &mut ImportMap) -> Vec<Self> {
        fields
            .iter()
            .map(|f| Self {
                name: field_name(&f.name),
                docs: f.docs.clone(),
                ty: mapper.map(&f.ty, imports),
            })
            .collect()
    }
}

/// The decoded and args object types of a borsh struct.
///
/// A discriminator is decoded as a leading `u8` field and filled in by the
/// encoder, so it never appears in the args type.
fn struct_types(
    name: &str,
    docs: &[String],
    fields: &[CodecField],
    has_discriminator: bool,
) -> (ObjectType, ObjectType) {
    let discriminator = has_discriminator.then(|| Field::new("discriminator", "number"));
    let decoded = ObjectType::new(name).docs(docs).fields(
        discriminator.into_iter().chain(
            fields
                .iter()
                .map(|f| Field::new(&f.name, &f.ty.ty).docs(&f.docs)),
        ),
    );
    let args = ObjectType::new(format!("{}Args", name)).fields(
        fields
            .iter()
            .map(|f| Field::new(&f.name, &f.ty.args)),
    );
    (decoded, args)
}

/// `getXEncoder`, `getXDecoder` and `getXCodec` for a borsh struct.
///
/// `discriminator` names the constant the encoder writes first.
fn struct_codec_fns(
    name: &str,
    fields: &[CodecField],
    discriminator: Option<&str>,
    imports: &mut ImportMap,
) -> [Fn; 3] {
    imports
        .kit(["combineCodec", "getStructDecoder", "getStructEncoder"])
        .kit_types(["Codec", "Decoder", "Encoder"]);

    let entries = |pick: fn(&TsType) -> &str, u8_codec: &str| -> Vec<CodeFragment> {
        discriminator
            .map(|_| CodeFragment::line(format!("[\"discriminator\", {}],", u8_codec)))
            .into_iter()
            .chain(
                fields
                    .iter()
                    .map(|f| CodeFragment::line(format!("[\"{}\", {}],", f.name, pick(&f.ty)))),
            )
            .collect()
    };
    let struct_block = |header: String, entries: Vec<CodeFragment>, close: &str| {
        if entries.is_empty() {
            CodeFragment::line(format!("{}]){}", header, close))
        } else {
            CodeFragment::block_with_close(header, entries, format!("]){}", close))
        }
    };

    let encoder = Fn::new(format!("get{}Encoder", name)).returns(format!("Encoder<{}Args>", name));
    let encoder = match discriminator {
        Some(constant) => {
            imports.kit(["getU8Encoder", "transformEncoder"]);
            encoder.body_fragment(CodeFragment::block_with_close(
                "return transformEncoder(",
                vec![
                    struct_block(
                        "getStructEncoder([".to_string(),
                        entries(|t| t.encoder.as_str(), "getU8Encoder()"),
                        ",",
                    ),
                    CodeFragment::line(format!(
                        "(value) => ({{ ...value, discriminator: {} }}),",
                        constant
                    )),
                ],
                ");",
            ))
        }
        None => encoder.body_fragment(struct_block(
            "return getStructEncoder([".to_string(),
            entries(|t| t.encoder.as_str(), ""),
            ";",
        )),
    };

    if discriminator.is_some() {
        imports.kit(["getU8Decoder"]);
    }
    let decoder = Fn::new(format!("get{}Decoder", name))
        .returns(format!("Decoder<{}>", name))
        .body_fragment(struct_block(
            "return getStructDecoder([".to_string(),
            entries(|t| t.decoder.as_str(), "getU8Decoder()"),
            ";",
        ));

    let codec = Fn::new(format!("get{}Codec", name))
        .returns(format!("Codec<{}Args, {}>", name, name))
        .body_line(format!(
            "return combineCodec(get{}Encoder(), get{}Decoder());",
            name, name
        ));

    [encoder, decoder, codec]
}
