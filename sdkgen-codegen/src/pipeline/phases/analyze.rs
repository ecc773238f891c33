//! Analyze phase - computes shared data from the root.

use eyre::Result;

use crate::pipeline::{CompilationContext, ComputedData, Phase};

/// Phase that computes sizes and type usage from the root.
///
/// Must run after `LowerPhase`.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Compute sizes and type usage from the root"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let root = ctx
            .root
            .as_ref()
            .ok_or_else(|| eyre::eyre!("root not set - AnalyzePhase must run after LowerPhase"))?;

        ctx.computed = Some(ComputedData::from_root(root));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pipeline::phases::LowerPhase,
        testing::{minimal_idl, sample_idl},
    };

    #[test]
    fn test_analyze_phase() {
        let mut ctx = CompilationContext::new(sample_idl());
        LowerPhase.run(&mut ctx).unwrap();
        assert!(ctx.computed.is_none());

        AnalyzePhase.run(&mut ctx).expect("analyze should succeed");

        let computed = ctx.computed.as_ref().unwrap();
        assert_eq!(computed.account_sizes.len(), 2);
        assert_eq!(computed.type_usage["mode"], 2);
    }

    #[test]
    fn test_analyze_phase_requires_root() {
        let mut ctx = CompilationContext::new(minimal_idl());
        assert!(AnalyzePhase.run(&mut ctx).is_err());
    }
}
