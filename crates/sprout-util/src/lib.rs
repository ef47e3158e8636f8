//! Shared utilities for Sprout.
//!
//! This crate provides cross-cutting concerns used by all other Sprout crates:
//! the error type, filesystem helpers, process spawning, and terminal status
//! lines.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
