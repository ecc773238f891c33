//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language renderers
//! - [`RenderOptions`] - Options shared by every renderer
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, RenderOptions};
