//! Program node tree.

use crate::TypeNode;

/// The root of the tree: one program and everything it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct RootNode {
    pub program: ProgramNode,
}

impl RootNode {
    pub fn new(program: ProgramNode) -> Self {
        Self { program }
    }

    /// Look up a defined type by name.
    pub fn find_defined_type(&self, name: &str) -> Option<&DefinedTypeNode> {
        self.program.defined_types.iter().find(|t| t.name == name)
    }

    /// Returns true if any account, instruction argument or type field is a public key.
    pub fn uses_public_key(&self) -> bool {
        let program = &self.program;
        program
            .accounts
            .iter()
            .flat_map(|a| a.fields.iter().map(|f| &f.ty))
            .chain(
                program
                    .instructions
                    .iter()
                    .flat_map(|ix| ix.arguments.iter().map(|a| &a.ty)),
            )
            .chain(program.defined_types.iter().flat_map(|t| t.fields().iter().map(|f| &f.ty)))
            .any(TypeNode::uses_public_key)
    }
}

/// Program metadata and its declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramNode {
    /// Program name, as written in the IDL.
    pub name: String,
    /// Base58 program address.
    pub public_key: String,
    pub version: String,
    pub docs: Vec<String>,
    pub accounts: Vec<AccountNode>,
    pub instructions: Vec<InstructionNode>,
    pub defined_types: Vec<DefinedTypeNode>,
    pub errors: Vec<ErrorNode>,
}

/// An account type owned by the program.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountNode {
    pub name: String,
    pub docs: Vec<String>,
    /// Leading tag byte, if the program writes one.
    pub discriminator: Option<u8>,
    pub fields: Vec<FieldNode>,
}

/// A named, typed struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    pub name: String,
    pub docs: Vec<String>,
    pub ty: TypeNode,
}

/// An instruction the program accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionNode {
    pub name: String,
    pub docs: Vec<String>,
    pub discriminator: u8,
    pub accounts: Vec<InstructionAccountNode>,
    pub arguments: Vec<InstructionArgumentNode>,
}

impl InstructionNode {
    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    pub fn has_optional_accounts(&self) -> bool {
        self.accounts.iter().any(|a| a.is_optional)
    }
}

/// An account an instruction reads or writes.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionAccountNode {
    pub name: String,
    pub docs: Vec<String>,
    pub is_writable: bool,
    pub is_signer: bool,
    pub is_optional: bool,
    /// Fixed address filled in when the caller does not supply one.
    pub default_address: Option<String>,
}

/// An instruction data argument.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionArgumentNode {
    pub name: String,
    pub docs: Vec<String>,
    pub ty: TypeNode,
}

/// A shared struct or enum type.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinedTypeNode {
    pub name: String,
    pub docs: Vec<String>,
    pub kind: DefinedTypeKind,
}

impl DefinedTypeNode {
    /// Struct fields, or an empty slice for enums.
    pub fn fields(&self) -> &[FieldNode] {
        match &self.kind {
            DefinedTypeKind::Struct { fields } => fields,
            DefinedTypeKind::Enum { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefinedTypeKind {
    Struct { fields: Vec<FieldNode> },
    /// Unit-variant enum, encoded as a single byte.
    Enum { variants: Vec<EnumVariantNode> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariantNode {
    pub name: String,
    pub docs: Vec<String>,
}

/// A custom program error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNode {
    pub code: u32,
    pub name: String,
    pub message: Option<String>,
}

impl ErrorNode {
    /// Message shown to users, falling back to the error name.
    pub fn display_message(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.name)
    }
}
