//! # Navigo CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs the
//! compiled `navigo` binary inside its own temporary working directory, with the
//! provider credentials removed from the environment and the user config
//! directory pointed somewhere empty, so results do not depend on the machine.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// A `navigo` command with no ambient configuration.
pub fn navigo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("navigo").expect("Failed to find navigo binary for testing");
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("GOOGLE_TRANSLATE_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

/// A `navigo` command running in `dir`, with `dir/.config` as the user config root.
pub fn navigo_in(dir: &Path) -> Command {
    let mut cmd = navigo_cmd();
    cmd.current_dir(dir).env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

/// Writes a project config pointing both providers at `base_url`.
pub fn write_project_config(dir: &Path, base_url: &str) {
    let content = format!(
        "[assistant]\nbase_url = \"{base_url}\"\ntimeout_secs = 5\n\n\
         [translator]\nbase_url = \"{base_url}\"\ntimeout_secs = 5\n"
    );
    std::fs::write(dir.join(".navigo.toml"), content).expect("Failed to write .navigo.toml");
}
