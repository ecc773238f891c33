//! IDL parsing and validation for the sdkgen client generator.
//!
//! The IDL is a JSON description of an on-chain program: its address, the
//! instructions it accepts, the accounts it owns, shared types and error
//! codes. Loading is fail-fast: a document that does not parse or does not
//! pass structural validation produces a [`miette`] diagnostic pointing into
//! the source, and nothing downstream runs.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod idl;
mod parse;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::IdlFile;
pub use idl::{
    Idl, IdlAccount, IdlEnumVariant, IdlErrorCode, IdlField, IdlInstruction,
    IdlInstructionAccount, IdlPrimitive, IdlType, IdlTypeDef, IdlTypeDefKind,
};
pub use validate::{is_valid_address, validate_identifier};
