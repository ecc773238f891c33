//! Lint for instruction naming conventions.

use sdkgen_idl::Idl;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about instruction names that aren't camelCase.
///
/// Renderers derive every other spelling from the camelCase name, so
/// `create_list` and `CreateList` produce surprising identifiers.
pub struct InstructionNamingLint;

impl Lint for InstructionNamingLint {
    fn name(&self) -> &'static str {
        "instruction-naming"
    }

    fn description(&self) -> &'static str {
        "Check instruction names are camelCase"
    }

    fn check(&self, idl: &Idl, diagnostics: &mut Vec<Diagnostic>) {
        for instruction in &idl.instructions {
            if !is_camel_case(&instruction.name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "instruction '{}' should use camelCase (e.g., 'createList' not 'create_list' or 'CreateList')",
                            instruction.name
                        ),
                    )
                    .from_lint(self.name())
                    .at(format!("instructions.{}", instruction.name)),
                );
            }
        }
    }
}

/// A lowercase ASCII letter followed by ASCII letters and digits.
fn is_camel_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}
