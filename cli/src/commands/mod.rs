//! # Navigo Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Each top-level subcommand lives in its own module, which defines its clap
//! arguments struct and an async `handle_*` function called from `main.rs`.
//!
//! - `bridge`: answers one chat turn for the host app (JSON in, JSON out)
//! - `translate`: produces a localized copy of a UI string table
//!

/// Chat bridge: prompt composition, model gateway, keyword fallback.
pub mod bridge;
/// Batch string-table translator.
pub mod translate;
