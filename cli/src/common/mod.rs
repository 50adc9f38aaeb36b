//! # Navigo Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are not tied to a single command group.
//!
//! - `fs`: reading inputs and writing outputs with consistent error context.
//!

/// Filesystem I/O helpers (`ensure_dir_exists`, `read_input_file`, `write_string_to_file`).
pub mod fs;
