//! IDL schema types.

use std::fmt;

use sdkgen_core::Version;
use serde::{Deserialize, Serialize};

/// Root of an IDL document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idl {
    /// Program name (e.g. `abl`)
    pub name: String,

    /// Program version, defaults to `0.1.0`
    #[serde(default)]
    pub version: Version,

    /// Base58 program address
    pub address: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<IdlInstruction>,

    #[serde(default)]
    pub accounts: Vec<IdlAccount>,

    #[serde(default)]
    pub types: Vec<IdlTypeDef>,

    #[serde(default)]
    pub errors: Vec<IdlErrorCode>,
}

impl Idl {
    /// Look up a defined type by name.
    pub fn find_type(&self, name: &str) -> Option<&IdlTypeDef> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Check whether the IDL declares nothing to generate besides the program.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
            && self.accounts.is_empty()
            && self.types.is_empty()
            && self.errors.is_empty()
    }
}

/// An instruction the program accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlInstruction {
    pub name: String,

    /// One-byte tag the program dispatches on
    pub discriminator: u8,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,

    #[serde(default)]
    pub accounts: Vec<IdlInstructionAccount>,

    #[serde(default)]
    pub args: Vec<IdlField>,
}

/// An account passed to an instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlInstructionAccount {
    pub name: String,

    #[serde(default)]
    pub writable: bool,

    #[serde(default)]
    pub signer: bool,

    #[serde(default)]
    pub optional: bool,

    /// Fixed address, for well-known accounts like the system program
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
}

/// An account type owned by the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlAccount {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<u8>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,

    #[serde(default)]
    pub fields: Vec<IdlField>,
}

/// A named, typed field of an account, struct or instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlField {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: IdlType,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
}

/// A shared type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlTypeDef {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,

    #[serde(rename = "type")]
    pub kind: IdlTypeDefKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IdlTypeDefKind {
    Struct {
        #[serde(default)]
        fields: Vec<IdlField>,
    },
    Enum {
        #[serde(default)]
        variants: Vec<IdlEnumVariant>,
    },
}

/// A unit variant of an enum type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlEnumVariant {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
}

/// A program error code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdlErrorCode {
    pub code: u32,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdlType {
    Primitive(IdlPrimitive),
    Option { option: Box<IdlType> },
    Vec { vec: Box<IdlType> },
    Array { array: (Box<IdlType>, usize) },
    Defined { defined: String },
}

impl IdlType {
    /// Name of the defined type this refers to, looking through wrappers.
    pub fn defined_name(&self) -> Option<&str> {
        match self {
            IdlType::Primitive(_) => None,
            IdlType::Option { option: inner } | IdlType::Vec { vec: inner } => {
                inner.defined_name()
            }
            IdlType::Array { array: (inner, _) } => inner.defined_name(),
            IdlType::Defined { defined } => Some(defined),
        }
    }
}

impl fmt::Display for IdlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdlType::Primitive(p) => write!(f, "{}", p.as_str()),
            IdlType::Option { option } => write!(f, "option<{}>", option),
            IdlType::Vec { vec } => write!(f, "vec<{}>", vec),
            IdlType::Array { array: (inner, len) } => write!(f, "[{}; {}]", inner, len),
            IdlType::Defined { defined } => write!(f, "{}", defined),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdlPrimitive {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    F32,
    F64,
    String,
    PublicKey,
    Bytes,
}

impl IdlPrimitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdlPrimitive::Bool => "bool",
            IdlPrimitive::U8 => "u8",
            IdlPrimitive::U16 => "u16",
            IdlPrimitive::U32 => "u32",
            IdlPrimitive::U64 => "u64",
            IdlPrimitive::U128 => "u128",
            IdlPrimitive::I8 => "i8",
            IdlPrimitive::I16 => "i16",
            IdlPrimitive::I32 => "i32",
            IdlPrimitive::I64 => "i64",
            IdlPrimitive::I128 => "i128",
            IdlPrimitive::F32 => "f32",
            IdlPrimitive::F64 => "f64",
            IdlPrimitive::String => "string",
            IdlPrimitive::PublicKey => "publicKey",
            IdlPrimitive::Bytes => "bytes",
        }
    }
}
