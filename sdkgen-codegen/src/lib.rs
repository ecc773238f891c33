//! Shared code generation utilities for the sdkgen client generator.
//!
//! This crate provides the language-agnostic half of client generation,
//! used by the language renderers (`sdkgen-codegen-rust`,
//! `sdkgen-codegen-typescript`) and the `sdkgen` binary.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - The renderer contract (LanguageCodegen, RenderOptions, etc.)
//! - [`output`] - Writing generated trees: formatting, config preservation, staging
//! - [`pipeline`] - IDL compilation (validate → lower → analyze)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod language;
pub mod output;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
