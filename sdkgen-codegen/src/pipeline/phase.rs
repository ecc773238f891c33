//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the compilation pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints and collects diagnostics
/// - `LowerPhase` - transforms the IDL into a `RootNode`
/// - `AnalyzePhase` - computes sizes and type usage from the root
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// Non-fatal issues should be recorded as diagnostics instead of
    /// returned as errors.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
