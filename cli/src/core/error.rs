//! # Navigo Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error kinds used throughout Navigo. Application code
//! propagates `anyhow::Error` (through the `Result` alias) and adds context as it
//! goes; the typed `NavigoError` variants sit at the bottom of those chains so that
//! callers whose behavior depends on the kind can recover it with `downcast_ref`.
//!
//! ## Error Kinds
//!
//! - `Config`: a credential is missing or the configuration is invalid. Fatal for
//!   the call path that needed it.
//! - `Provider`: an external provider answered with a non-success status or a
//!   response that could not be used. The assistant recovers from these by falling
//!   back to canned responses; the translator aborts.
//! - `Input`: the caller handed us something unusable (missing file, bad JSON).
//! - `FileSystem`: local filesystem problems outside of reading inputs.
//! - `Reported`: the failure was already written to the caller in the command's own
//!   format, so `main` must only set the exit status.
//!
//! ## Examples
//!
//! ```rust
//! let is_config = err
//!     .downcast_ref::<NavigoError>()
//!     .is_some_and(|e| matches!(e, NavigoError::Config(_)));
//! ```
//!
use thiserror::Error;

/// Custom error type for the Navigo application.
#[derive(Error, Debug)]
pub enum NavigoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// Construct with `NavigoError::http`; the request URL carries the credential.
    #[error("HTTP request failed")]
    Http {
        #[source]
        source: reqwest::Error,
    },

    #[error("Translation count mismatch: sent {sent} texts, received {received}")]
    TranslationMismatch { sent: usize, received: usize },

    #[error("Failure already reported to the caller")]
    Reported,
}

impl NavigoError {
    /// Wraps a transport or decoding error with the request URL stripped.
    pub fn http(err: reqwest::Error) -> Self {
        NavigoError::Http {
            source: err.without_url(),
        }
    }

    /// True for errors raised because a credential or setting is missing or invalid.
    pub fn is_config(&self) -> bool {
        matches!(self, NavigoError::Config(_))
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Returns true when any error in the chain is a `NavigoError::Config`.
pub fn is_config_error(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<NavigoError>())
        .any(NavigoError::is_config)
}
