//! TypeScript AST builders for generating types, functions, imports, and exports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! rendered through [`CodeBuilder`](sdkgen_codegen::builder::CodeBuilder).

mod consts;
mod enums;
mod exports;
mod fns;
mod imports;
mod types;

pub use consts::Const;
pub use enums::TsEnum;
pub use exports::Export;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use types::{Field, ObjectType, TypeAlias};
