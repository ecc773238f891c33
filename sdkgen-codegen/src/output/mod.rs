//! Writing generated trees to disk.
//!
//! - [`write_tree`] - Write a rendered file set into an output directory
//! - [`Formatter`] - External formatters run over written files
//! - [`ConfigPreserver`] - Back up hand-maintained files around generation
//! - [`StagingArea`] - Render into a temporary directory and merge

mod format;
mod preserve;
mod staging;
mod tree;

pub use format::{CommandFormatter, FormatOutcome, Formatter};
pub use preserve::{
    BACKUP_SUFFIX, ConfigPreserver, PreservationSet, PreserveError, PreserveGuard, PreservedFile,
    RestoreReport,
};
pub use staging::{MergeReport, Protection, StagingArea};
pub use tree::write_tree;
