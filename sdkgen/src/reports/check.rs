//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from IDL validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the IDL file.
    pub idl_path: PathBuf,
    /// Program name from the IDL.
    pub program: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({})",
                self.idl_path.display(),
                self.program
            ));
        } else {
            let count = self.errors.len();
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.idl_path.display(),
                count,
                if count == 1 { "" } else { "s" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_valid_with_warning() {
        let report = CheckReport {
            idl_path: PathBuf::from("program/idl.json"),
            program: "abl".into(),
            errors: Vec::new(),
            warnings: vec!["instruction 'close' has no docs\n  --> instructions.close".into()],
            infos: Vec::new(),
        };
        assert!(report.is_valid());
        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        warning: instruction 'close' has no docs
          --> instructions.close

        ✓ program/idl.json is valid (abl)
        ");
    }

    #[test]
    fn test_errors_counted() {
        let report = CheckReport {
            idl_path: PathBuf::from("idl.json"),
            program: "abl".into(),
            errors: vec!["forced error".into()],
            warnings: Vec::new(),
            infos: Vec::new(),
        };
        assert!(!report.is_valid());
        let rendered = BufferOutput::render(&report);
        assert!(rendered.ends_with("✗ idl.json has 1 error"));
    }
}
