//! Pipeline orchestrator.

use eyre::Result;
use sdkgen_idl::Idl;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower, analyze) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(idl)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to run a different set of lints.
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on an IDL.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, collects diagnostics
    /// 2. LowerPhase - transforms the IDL into a root
    /// 3. AnalyzePhase - computes sizes and type usage
    /// 4. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin hook fails.
    pub fn run(&self, idl: Idl) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(idl);

        let builtin: [&dyn Phase; 3] = [&self.validate, &LowerPhase, &AnalyzePhase];
        let user = self.phases.iter().map(|p| p.as_ref());

        for phase in builtin.into_iter().chain(user) {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
