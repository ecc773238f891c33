//! Restore command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from recovering an interrupted run.
#[derive(Debug)]
pub struct RecoverReport {
    /// Directory holding the protected files.
    pub dir: PathBuf,
    /// Whether files were only listed.
    pub dry_run: bool,
    /// Files put back from their backup (or that would be, on a dry run).
    pub restored: Vec<String>,
    /// Backups that vanished between the scan and the restore.
    pub missing: Vec<String>,
}

impl Report for RecoverReport {
    fn render(&self, out: &mut dyn Output) {
        if self.restored.is_empty() && self.missing.is_empty() {
            out.preformatted(&format!("No leftover backups in {}", self.dir.display()));
            return;
        }

        let heading = if self.dry_run {
            "Would restore"
        } else {
            "Restored"
        };
        out.section(&format!("{} in {}", heading, self.dir.display()));
        for name in &self.restored {
            out.list_item(name);
        }
        for name in &self.missing {
            out.warning(&format!("backup of '{}' disappeared before it was restored", name));
        }
    }
}
