//! TypeScript client renderer for sdkgen.
//!
//! Renders a client built on [`@solana/kit`](https://www.npmjs.com/package/@solana/kit)
//! codecs from a [`RootNode`](sdkgen_ir::RootNode).
//!
//! # Usage
//!
//! ```ignore
//! use sdkgen_codegen_typescript::{Generator, LanguageCodegen};
//! use std::path::Path;
//!
//! let generator = Generator::new(&root);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("sdk/ts/src/generated"))?;
//! ```
//!
//! # Generated Output
//!
//! - `index.ts` - Re-exports every folder
//! - `programs/<program>.ts` - Program address and instruction enum
//! - `accounts/*.ts` - Account types, codecs, `decode*` and `fetch*`
//! - `instructions/*.ts` - Instruction data codecs and `get*Instruction`
//! - `types/*.ts` - Defined types and their codecs
//! - `errors/<program>.ts` - Error codes, messages and `is*Error`
//!
//! Each folder carries its own `index.ts` barrel.

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Const, Export, Field, Fn, Import, ObjectType, Param, TsEnum, TypeAlias};
pub use code_file::{CodeFile, ImportMap, KIT, RawCode};
pub use generator::{Generator, TypeScriptOptions};
pub use naming::{const_name, field_name, is_reserved, safe_name, type_name};
pub use sdkgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile, RenderOptions};
pub use type_mapper::{TYPES_MODULE, TsType, TypeScriptTypeMapper};
