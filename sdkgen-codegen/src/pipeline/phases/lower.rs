//! Lower phase - transforms the IDL into a root.
//!
//! The IDL has already passed structural validation when it gets here, so
//! every `defined` reference names a declared type and lowering cannot fail.

use eyre::Result;
use sdkgen_idl::{
    Idl, IdlAccount, IdlErrorCode, IdlField, IdlInstruction, IdlInstructionAccount,
    IdlPrimitive, IdlType, IdlTypeDef, IdlTypeDefKind,
};
use sdkgen_ir::{
    AccountNode, DefinedTypeKind, DefinedTypeNode, EnumVariantNode, ErrorNode, FieldNode,
    InstructionAccountNode, InstructionArgumentNode, InstructionNode, NumberFormat, ProgramNode,
    RootNode, TypeNode,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that transforms the IDL into a [`RootNode`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform the IDL into a root"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.root = Some(lower_idl(&ctx.idl));
        Ok(())
    }
}

/// Lower an IDL into a root.
pub fn lower_idl(idl: &Idl) -> RootNode {
    RootNode::new(ProgramNode {
        name: idl.name.clone(),
        public_key: idl.address.clone(),
        version: idl.version.to_string(),
        docs: idl.docs.clone(),
        accounts: idl.accounts.iter().map(lower_account).collect(),
        instructions: idl.instructions.iter().map(lower_instruction).collect(),
        defined_types: idl.types.iter().map(lower_type_def).collect(),
        errors: idl.errors.iter().map(lower_error).collect(),
    })
}

fn lower_account(account: &IdlAccount) -> AccountNode {
    AccountNode {
        name: account.name.clone(),
        docs: account.docs.clone(),
        discriminator: account.discriminator,
        fields: account.fields.iter().map(lower_field).collect(),
    }
}

fn lower_field(field: &IdlField) -> FieldNode {
    FieldNode {
        name: field.name.clone(),
        docs: field.docs.clone(),
        ty: lower_type(&field.ty),
    }
}

fn lower_instruction(instruction: &IdlInstruction) -> InstructionNode {
    InstructionNode {
        name: instruction.name.clone(),
        docs: instruction.docs.clone(),
        discriminator: instruction.discriminator,
        accounts: instruction
            .accounts
            .iter()
            .map(lower_instruction_account)
            .collect(),
        arguments: instruction
            .args
            .iter()
            .map(|arg| InstructionArgumentNode {
                name: arg.name.clone(),
                docs: arg.docs.clone(),
                ty: lower_type(&arg.ty),
            })
            .collect(),
    }
}

fn lower_instruction_account(account: &IdlInstructionAccount) -> InstructionAccountNode {
    InstructionAccountNode {
        name: account.name.clone(),
        docs: account.docs.clone(),
        is_writable: account.writable,
        is_signer: account.signer,
        is_optional: account.optional,
        default_address: account.address.clone(),
    }
}

fn lower_type_def(def: &IdlTypeDef) -> DefinedTypeNode {
    let kind = match &def.kind {
        IdlTypeDefKind::Struct { fields } => DefinedTypeKind::Struct {
            fields: fields.iter().map(lower_field).collect(),
        },
        IdlTypeDefKind::Enum { variants } => DefinedTypeKind::Enum {
            variants: variants
                .iter()
                .map(|v| EnumVariantNode {
                    name: v.name.clone(),
                    docs: v.docs.clone(),
                })
                .collect(),
        },
    };
    DefinedTypeNode {
        name: def.name.clone(),
        docs: def.docs.clone(),
        kind,
    }
}

fn lower_error(error: &IdlErrorCode) -> ErrorNode {
    ErrorNode {
        code: error.code,
        name: error.name.clone(),
        message: error.message.clone(),
    }
}

fn lower_type(ty: &IdlType) -> TypeNode {
    match ty {
        IdlType::Primitive(p) => lower_primitive(*p),
        IdlType::Option { option } => TypeNode::option(lower_type(option)),
        IdlType::Vec { vec } => TypeNode::vec(lower_type(vec)),
        IdlType::Array { array: (inner, len) } => TypeNode::array(lower_type(inner), *len),
        IdlType::Defined { defined } => TypeNode::Defined(defined.clone()),
    }
}

fn lower_primitive(primitive: IdlPrimitive) -> TypeNode {
    let number = |format| TypeNode::Number(format);
    match primitive {
        IdlPrimitive::Bool => TypeNode::Boolean,
        IdlPrimitive::U8 => number(NumberFormat::U8),
        IdlPrimitive::U16 => number(NumberFormat::U16),
        IdlPrimitive::U32 => number(NumberFormat::U32),
        IdlPrimitive::U64 => number(NumberFormat::U64),
        IdlPrimitive::U128 => number(NumberFormat::U128),
        IdlPrimitive::I8 => number(NumberFormat::I8),
        IdlPrimitive::I16 => number(NumberFormat::I16),
        IdlPrimitive::I32 => number(NumberFormat::I32),
        IdlPrimitive::I64 => number(NumberFormat::I64),
        IdlPrimitive::I128 => number(NumberFormat::I128),
        IdlPrimitive::F32 => number(NumberFormat::F32),
        IdlPrimitive::F64 => number(NumberFormat::F64),
        IdlPrimitive::String => TypeNode::String,
        IdlPrimitive::PublicKey => TypeNode::PublicKey,
        IdlPrimitive::Bytes => TypeNode::Bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SAMPLE_ADDRESS, sample_idl};

    #[test]
    fn test_lower_program() {
        let root = lower_idl(&sample_idl());
        let program = &root.program;

        assert_eq!(program.name, "abl");
        assert_eq!(program.public_key, SAMPLE_ADDRESS);
        assert_eq!(program.version, "0.1.0");
        assert_eq!(program.accounts.len(), 2);
        assert_eq!(program.instructions.len(), 6);
        assert_eq!(program.errors.len(), 14);
    }

    #[test]
    fn test_lower_instruction_accounts() {
        let root = lower_idl(&sample_idl());
        let create = &root.program.instructions[0];

        assert_eq!(create.name, "createList");
        assert_eq!(create.discriminator, 1);
        assert!(create.accounts[0].is_signer && create.accounts[0].is_writable);
        assert_eq!(
            create.accounts[2].default_address.as_deref(),
            Some("11111111111111111111111111111111")
        );
        assert_eq!(create.arguments[0].ty, TypeNode::Defined("mode".into()));
        assert_eq!(create.arguments[1].ty, TypeNode::PublicKey);

        let thaw = &root.program.instructions[5];
        assert!(thaw.has_optional_accounts());
        assert!(!thaw.has_arguments());
    }

    #[test]
    fn test_lower_nested_types() {
        let ty: IdlType =
            serde_json::from_str(r#"{"option": {"array": [{"vec": "u16"}, 4]}}"#).unwrap();
        assert_eq!(
            lower_type(&ty),
            TypeNode::option(TypeNode::array(
                TypeNode::vec(TypeNode::Number(NumberFormat::U16)),
                4
            ))
        );
    }

    #[test]
    fn test_lower_enum() {
        let root = lower_idl(&sample_idl());
        let mode = root.find_defined_type("mode").unwrap();
        let DefinedTypeKind::Enum { variants } = &mode.kind else {
            panic!("mode should be an enum");
        };
        let names: Vec<_> = variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["allow", "allowAllEoas", "block"]);
    }
}
