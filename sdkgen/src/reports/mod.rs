//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`] target.

mod check;
mod generate;
mod info;
mod output;
mod restore;

pub use check::CheckReport;
pub use generate::{
    GenerateReport, GenerationResult, ManifestAction, ManifestChange, PreviewTarget, TargetOutcome,
};
pub use info::{InfoReport, SizeInfo, Stats, TargetInfo};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use restore::RecoverReport;
