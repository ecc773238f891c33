//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the IDL and collects diagnostics
//! - [`LowerPhase`] - transforms the IDL into a [`RootNode`](sdkgen_ir::RootNode)
//! - [`AnalyzePhase`] - computes shared data from the root

mod analyze;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use lower::{LowerPhase, lower_idl};
pub use validate::{
    InstructionNamingLint, Lint, MissingDocsLint, UnusedTypeLint, ValidatePhase,
};
