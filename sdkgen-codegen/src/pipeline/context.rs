//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use sdkgen_idl::Idl;
use sdkgen_ir::RootNode;

use super::{ComputedData, diagnostic::Diagnostic};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The IDL being compiled.
    pub idl: Idl,
    /// The lowered root (populated by LowerPhase).
    pub root: Option<RootNode>,
    /// Pre-computed analysis data (populated by AnalyzePhase).
    pub computed: Option<ComputedData>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(idl: Idl) -> Self {
        Self {
            idl,
            root: None,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Take the root out of the context.
    pub fn take_root(&mut self) -> Result<RootNode> {
        self.root
            .take()
            .ok_or_else(|| eyre!("root not set - did LowerPhase run?"))
    }

    /// Take the computed data out of the context.
    pub fn take_computed(&mut self) -> Result<ComputedData> {
        self.computed
            .take()
            .ok_or_else(|| eyre!("computed data not set - did AnalyzePhase run?"))
    }
}
