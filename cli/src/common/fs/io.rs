//! # Navigo Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that attach the path to every failure:
//! - **`ensure_dir_exists`**: `mkdir -p`, rejecting paths that exist as files.
//! - **`read_input_file`**: reads a caller-supplied input, reporting a missing file
//!   as `NavigoError::Input` so it can be told apart from other I/O failures.
//! - **`write_string_to_file`**: creates the parent directory, then overwrites the
//!   target in a single write.
//!
use crate::core::error::{NavigoError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating parents as needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating it
/// fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        info!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        anyhow::bail!(NavigoError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    } else {
        debug!("Directory already exists: {}", path.display());
    }
    Ok(())
}

/// Reads an input file the caller asked us to process.
///
/// # Errors
///
/// `NavigoError::Input` with an `Input file not found: <path>` message when the path
/// is not a regular file; an I/O error with context when reading fails.
pub fn read_input_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        anyhow::bail!(NavigoError::Input(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Writes string content to `path`, overwriting any existing file.
///
/// The parent directory is created first when it does not exist yet.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {}", path.display()))?;
    info!("Wrote content to file: {}", path.display());
    Ok(())
}
