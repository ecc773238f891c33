//! Rust AST builders for generating structs, enums, impls, and functions.
//!
//! These provide a high-level API for constructing Rust syntax, rendered
//! through [`CodeBuilder`](sdkgen_codegen::builder::CodeBuilder).

mod enums;
mod fns;
mod impls;
mod structs;

pub use enums::{Enum, Variant};
pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};

/// `#[derive(A, B)]`, or nothing when there are no derives.
fn derive_line(derives: &[String]) -> Option<String> {
    if derives.is_empty() {
        None
    } else {
        Some(format!("#[derive({})]", derives.join(", ")))
    }
}
