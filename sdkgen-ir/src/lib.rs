//! Intermediate representation types for the sdkgen client generator.
//!
//! This crate provides the node tree every renderer consumes. It is the
//! "root" of a program: built once from the IDL, then walked by one
//! [`Visitor`] per target language.
//!
//! # Architecture
//!
//! ```text
//! idl.json → sdkgen-idl (parsing) → sdkgen-ir (RootNode) → renderers
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no Rust/TypeScript-specific concerns)
//! - Fully resolved (every `Defined` type names an existing node)
//! - Self-contained (no external dependencies beyond std)

mod node;
mod size;
mod types;
mod visitor;

pub use node::{
    AccountNode, DefinedTypeKind, DefinedTypeNode, EnumVariantNode, ErrorNode, FieldNode,
    InstructionAccountNode, InstructionArgumentNode, InstructionNode, ProgramNode, RootNode,
};
pub use types::{NumberFormat, TypeNode};
pub use visitor::Visitor;
