//! Rust type mapper implementation.

use std::collections::{BTreeSet, HashSet};

use sdkgen_ir::{DefinedTypeKind, FieldNode, RootNode, TypeNode};

use crate::naming::type_name;

/// Maps IR types to Rust type syntax.
#[derive(Debug, Clone, Copy)]
pub struct RustTypeMapper<'a> {
    root: &'a RootNode,
}

impl<'a> RustTypeMapper<'a> {
    pub fn new(root: &'a RootNode) -> Self {
        Self { root }
    }

    pub fn map(&self, ty: &TypeNode) -> String {
        match ty {
            TypeNode::Boolean => "bool".to_string(),
            TypeNode::Number(format) => format.as_str().to_string(),
            TypeNode::String => "String".to_string(),
            TypeNode::PublicKey => "Pubkey".to_string(),
            TypeNode::Bytes => "Vec<u8>".to_string(),
            TypeNode::Option(inner) => format!("Option<{}>", self.map(inner)),
            TypeNode::Vec(inner) => format!("Vec<{}>", self.map(inner)),
            TypeNode::Array(inner, len) => format!("[{}; {}]", self.map(inner), len),
            TypeNode::Defined(name) => type_name(name),
        }
    }

    /// Derives for a struct with these fields. `Eq` is dropped when a
    /// float is reachable through any field.
    pub fn struct_derives(&self, fields: &[FieldNode]) -> Vec<&'static str> {
        let mut derives = vec!["BorshSerialize", "BorshDeserialize", "Clone", "Debug"];
        if fields.iter().all(|f| self.is_eq(&f.ty)) {
            derives.push("Eq");
        }
        derives.push("PartialEq");
        derives
    }

    pub fn is_eq(&self, ty: &TypeNode) -> bool {
        self.is_eq_guarded(ty, &mut HashSet::new())
    }

    fn is_eq_guarded<'n>(&self, ty: &'n TypeNode, visiting: &mut HashSet<&'n str>) -> bool
    where
        'a: 'n,
    {
        match ty {
            TypeNode::Number(format) => !format.is_float(),
            TypeNode::Option(inner) | TypeNode::Vec(inner) | TypeNode::Array(inner, _) => {
                self.is_eq_guarded(inner, visiting)
            }
            TypeNode::Defined(name) => {
                if !visiting.insert(name) {
                    return true;
                }
                let Some(def) = self.root.find_defined_type(name) else {
                    return true;
                };
                let eq = match &def.kind {
                    DefinedTypeKind::Enum { .. } => true,
                    DefinedTypeKind::Struct { fields } => {
                        fields.iter().all(|f| self.is_eq_guarded(&f.ty, visiting))
                    }
                };
                visiting.remove(name.as_str());
                eq
            }
            TypeNode::Boolean | TypeNode::String | TypeNode::PublicKey | TypeNode::Bytes => true,
        }
    }
}

/// What a set of types needs imported.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeImports {
    pub pubkey: bool,
    /// Defined type names (as written in the IDL), sorted
    pub defined: BTreeSet<String>,
}

impl TypeImports {
    pub fn collect<'t>(types: impl IntoIterator<Item = &'t TypeNode>) -> Self {
        let mut imports = Self::default();
        for ty in types {
            imports.pubkey |= ty.uses_public_key();
            ty.for_each_defined(&mut |name| {
                imports.defined.insert(name.to_string());
            });
        }
        imports
    }

    /// Drop a defined type, e.g. the one the file itself declares.
    pub fn without(mut self, name: &str) -> Self {
        self.defined.remove(name);
        self
    }
}
