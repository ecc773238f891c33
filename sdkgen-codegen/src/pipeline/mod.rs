//! Compilation pipeline for code generation.
//!
//! [`Pipeline`] turns a validated [`Idl`](sdkgen_idl::Idl) into the
//! [`RootNode`](sdkgen_ir::RootNode) renderers consume:
//!
//! - Explicit phase boundaries (validate → lower → analyze)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared computation via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use sdkgen_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().run(idl)?;
//! for warning in ctx.warnings() {
//!     eprintln!("{}", warning);
//! }
//! let root = ctx.take_root()?;
//! ```

mod computed;
mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use computed::ComputedData;
pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
