//! Validate phase - runs lints on the IDL.

mod lint;
mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{InstructionNamingLint, MissingDocsLint, UnusedTypeLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks the IDL using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingDocsLint),
                Box::new(InstructionNamingLint),
                Box::new(UnusedTypeLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Lint the IDL and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.idl, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
