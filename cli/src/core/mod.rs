//! # Navigo Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command group:
//! - `config`: layered TOML configuration plus injected credentials
//! - `error`: the `NavigoError` enum and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{NavigoError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
