//! Core utilities and types for the sdkgen client generator.
//!
//! This crate provides the file writing primitives, naming helpers and
//! version handling shared by every other sdkgen crate.

mod file;
mod utils;
mod version;

// File operations
pub use file::{File, GENERATED_HEADER, GeneratedFile, WriteResult};
// String utilities
pub use utils::{
    to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case, to_snake_case,
};
pub use version::{Version, VersionError};
