//! Core types for Sprout.
//!
//! This crate defines the pieces of a scaffolding run: the invocation
//! context, the global configuration, choosing and materializing the project
//! template, and patching the generated `package.json`.
//!
//! This crate is intentionally free of process spawning.

/// Package manager invoked after scaffolding unless configured otherwise.
pub const DEFAULT_PACKAGE_MANAGER: &str = "pnpm";

/// Manifest file patched with the project name, relative to the project root.
pub const MANIFEST_FILE: &str = "package.json";

pub mod config;
pub mod context;
pub mod manifest;
pub mod template;
