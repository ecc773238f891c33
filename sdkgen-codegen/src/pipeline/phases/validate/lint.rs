//! Lint trait for IDL checks.

use sdkgen_idl::Idl;

use crate::pipeline::Diagnostic;

/// A lint that checks the IDL for issues.
///
/// Lints run after structural validation, so they only see IDLs that
/// already parse and resolve. They report style and hygiene problems.
pub trait Lint: Send + Sync {
    /// The name of this lint, e.g. `missing-docs`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the IDL and add any diagnostics.
    fn check(&self, idl: &Idl, diagnostics: &mut Vec<Diagnostic>);
}
