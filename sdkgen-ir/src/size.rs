//! Borsh size computation.

use crate::{AccountNode, DefinedTypeKind, DefinedTypeNode, InstructionNode, RootNode, TypeNode};

impl RootNode {
    /// Encoded size of a type, when every value of it has the same size.
    ///
    /// Strings, byte buffers, vectors and options are variable-length.
    /// Recursive definitions have no fixed size.
    pub fn fixed_size(&self, ty: &TypeNode) -> Option<usize> {
        self.fixed_size_inner(ty, &mut Vec::new())
    }

    /// Encoded size of a defined type.
    pub fn defined_type_size(&self, defined_type: &DefinedTypeNode) -> Option<usize> {
        self.fixed_size(&TypeNode::Defined(defined_type.name.clone()))
    }

    /// Account data size including the discriminator byte.
    pub fn account_size(&self, account: &AccountNode) -> Option<usize> {
        let discriminator = usize::from(account.discriminator.is_some());
        account.fields.iter().try_fold(discriminator, |total, field| {
            Some(total + self.fixed_size(&field.ty)?)
        })
    }

    /// Instruction data size including the discriminator byte.
    pub fn instruction_data_size(&self, instruction: &InstructionNode) -> Option<usize> {
        instruction.arguments.iter().try_fold(1, |total, arg| {
            Some(total + self.fixed_size(&arg.ty)?)
        })
    }

    fn fixed_size_inner<'a>(&'a self, ty: &'a TypeNode, visiting: &mut Vec<&'a str>) -> Option<usize> {
        match ty {
            TypeNode::Boolean => Some(1),
            TypeNode::Number(format) => Some(format.size()),
            TypeNode::PublicKey => Some(32),
            TypeNode::String | TypeNode::Bytes | TypeNode::Vec(_) | TypeNode::Option(_) => None,
            TypeNode::Array(inner, len) => {
                let size = self.fixed_size_inner(inner, visiting)?;
                size.checked_mul(*len)
            }
            TypeNode::Defined(name) => {
                if visiting.contains(&name.as_str()) {
                    return None;
                }
                let defined = self.find_defined_type(name)?;
                match &defined.kind {
                    DefinedTypeKind::Enum { .. } => Some(1),
                    DefinedTypeKind::Struct { fields } => {
                        visiting.push(name);
                        let size = fields.iter().try_fold(0usize, |total, field| {
                            Some(total + self.fixed_size_inner(&field.ty, visiting)?)
                        });
                        visiting.pop();
                        size
                    }
                }
            }
        }
    }
}
