//! Rust client renderer for sdkgen.
//!
//! Walks a [`RootNode`](sdkgen_ir::RootNode) and renders a module tree for a
//! client crate built on `solana-program` and `borsh`:
//!
//! ```text
//! generated/
//!   mod.rs
//!   programs.rs
//!   accounts/      borsh structs with DISCRIMINATOR, LEN and from_bytes
//!   instructions/  accounts struct, data, args and a builder
//!   types/
//!   errors/        thiserror enum convertible to ProgramError
//! ```

mod generator;
mod naming;
mod rust_file;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Enum, Field, Fn, Impl, Param, Struct, Variant};
pub use generator::{DEFAULT_MODULE_PATH, Generator, RustOptions};
pub use naming::{const_name, field_name, file_name, is_reserved, safe_name, type_name};
pub use rust_file::{RawCode, RustFile, Use};
pub use sdkgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile, RenderOptions};
pub use type_mapper::{RustTypeMapper, TypeImports};
