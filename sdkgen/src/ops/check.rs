//! Check operation - IDL validation.

use std::path::Path;

use eyre::Result;
use sdkgen_codegen::pipeline::{CompilationContext, Phase, Severity, phases::ValidatePhase};
use sdkgen_idl::Idl;

use super::describe;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the lints without stopping at the first error so every diagnostic
/// ends up in the report.
pub fn check(idl: Idl, idl_path: &Path) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(idl);
    if let Err(e) = ValidatePhase::new().run(&mut ctx) {
        tracing::debug!(error = %e, "validation reported errors");
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = describe(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        idl_path: idl_path.to_path_buf(),
        program: ctx.idl.name.clone(),
        errors,
        warnings,
        infos,
    })
}
