//! Lint for undocumented instructions.

use sdkgen_idl::Idl;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about instructions without docs.
///
/// Instruction docs become the doc comments on the generated builders,
/// which is what SDK users read first.
pub struct MissingDocsLint;

impl Lint for MissingDocsLint {
    fn name(&self) -> &'static str {
        "missing-docs"
    }

    fn description(&self) -> &'static str {
        "Check every instruction has docs"
    }

    fn check(&self, idl: &Idl, diagnostics: &mut Vec<Diagnostic>) {
        for instruction in &idl.instructions {
            let undocumented = instruction.docs.iter().all(|line| line.trim().is_empty());
            if undocumented {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("instruction '{}' has no docs", instruction.name),
                    )
                    .from_lint(self.name())
                    .at(format!("instructions.{}", instruction.name)),
                );
            }
        }
    }
}
