//! Core operations.
//!
//! This module contains the business logic for sdkgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod info;
pub mod restore;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use info::info;
pub use restore::restore;

use sdkgen_codegen::pipeline::Diagnostic;

/// One diagnostic as a report line: message, then its location.
fn describe(diag: &Diagnostic) -> String {
    let mut msg = diag.message.clone();
    if let Some(lint) = diag.lint {
        msg.push_str(&format!(" [{}]", lint));
    }
    if let Some(loc) = &diag.location {
        msg.push_str(&format!("\n  --> {}", loc));
    }
    msg
}
