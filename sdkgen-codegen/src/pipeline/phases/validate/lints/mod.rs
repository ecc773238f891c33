//! Built-in lints.

mod instruction_naming;
mod missing_docs;
mod unused_type;

pub use instruction_naming::InstructionNamingLint;
pub use missing_docs::MissingDocsLint;
pub use unused_type::UnusedTypeLint;
