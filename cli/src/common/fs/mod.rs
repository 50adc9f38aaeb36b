//! # Navigo Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the command handlers. Import from the submodule:
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let source = io::read_input_file(Path::new("public/i18n/en.json"))?;
//! io::write_string_to_file(Path::new("public/i18n/fr.json"), &rendered)?;
//! ```
//!

/// Basic file I/O operations.
pub mod io;
