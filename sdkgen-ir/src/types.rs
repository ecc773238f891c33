//! Field type representation.

/// Fixed-width number formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
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
}

impl NumberFormat {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberFormat::U8 => "u8",
            NumberFormat::U16 => "u16",
            NumberFormat::U32 => "u32",
            NumberFormat::U64 => "u64",
            NumberFormat::U128 => "u128",
            NumberFormat::I8 => "i8",
            NumberFormat::I16 => "i16",
            NumberFormat::I32 => "i32",
            NumberFormat::I64 => "i64",
            NumberFormat::I128 => "i128",
            NumberFormat::F32 => "f32",
            NumberFormat::F64 => "f64",
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        match self {
            NumberFormat::U8 | NumberFormat::I8 => 1,
            NumberFormat::U16 | NumberFormat::I16 => 2,
            NumberFormat::U32 | NumberFormat::I32 | NumberFormat::F32 => 4,
            NumberFormat::U64 | NumberFormat::I64 | NumberFormat::F64 => 8,
            NumberFormat::U128 | NumberFormat::I128 => 16,
        }
    }

    /// Returns true for integers too wide for a JavaScript `number`.
    pub fn is_big(&self) -> bool {
        matches!(
            self,
            NumberFormat::U64 | NumberFormat::U128 | NumberFormat::I64 | NumberFormat::I128
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, NumberFormat::F32 | NumberFormat::F64)
    }
}

/// The type of a field, argument or nested element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeNode {
    Boolean,
    Number(NumberFormat),
    /// Length-prefixed UTF-8 string.
    String,
    /// 32-byte public key.
    PublicKey,
    /// Length-prefixed byte buffer.
    Bytes,
    Option(Box<TypeNode>),
    Vec(Box<TypeNode>),
    Array(Box<TypeNode>, usize),
    /// Reference to a [`DefinedTypeNode`](crate::DefinedTypeNode) by name.
    Defined(String),
}

impl TypeNode {
    pub fn option(inner: TypeNode) -> Self {
        TypeNode::Option(Box::new(inner))
    }

    pub fn vec(inner: TypeNode) -> Self {
        TypeNode::Vec(Box::new(inner))
    }

    pub fn array(inner: TypeNode, len: usize) -> Self {
        TypeNode::Array(Box::new(inner), len)
    }

    /// Call `f` with the name of every defined type this type mentions.
    pub fn for_each_defined(&self, f: &mut impl FnMut(&str)) {
        match self {
            TypeNode::Option(inner) | TypeNode::Vec(inner) | TypeNode::Array(inner, _) => {
                inner.for_each_defined(f)
            }
            TypeNode::Defined(name) => f(name),
            TypeNode::Boolean
            | TypeNode::Number(_)
            | TypeNode::String
            | TypeNode::PublicKey
            | TypeNode::Bytes => {}
        }
    }

    /// Returns true if the type or anything nested in it is a public key.
    pub fn uses_public_key(&self) -> bool {
        match self {
            TypeNode::PublicKey => true,
            TypeNode::Option(inner) | TypeNode::Vec(inner) | TypeNode::Array(inner, _) => {
                inner.uses_public_key()
            }
            _ => false,
        }
    }
}
