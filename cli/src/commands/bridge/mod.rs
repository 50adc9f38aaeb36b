//! # Navigo Assistant Bridge (`navigo bridge`)
//!
//! File: cli/src/commands/bridge/mod.rs
//!
//! ## Overview
//!
//! One invocation answers one chat turn for the host application. The caller passes
//! a JSON request as the only positional argument and reads the answer back as JSON:
//!
//! ```bash
//! navigo bridge '{"prompt": "Where is my bus?", "language": "en"}'
//! # stdout: {"response":"..."}
//!
//! # On failure (exit status 1)
//! # stderr: {"error":"Configuration error: GEMINI_API_KEY not set in environment"}
//! ```
//!
//! ## Architecture
//!
//! - `request`: parses the JSON request and normalizes it into a `RequestContext`
//! - `prompt`: renders the persona template plus the per-request context block
//! - `gateway`: calls the generative model, falling back on any provider failure
//! - `fallback`: ordered keyword rules producing canned replies
//! - `action`: the closed set of `[ACTION:NAME]` tags replies may end with
//!
//! Flow: parse request → compose prompt → gateway (→ fallback) → JSON on stdout.
//! Every error raised along the way is caught in `handle_bridge` and written as
//! `{"error": ...}`; the process never ends with an unstructured crash report.
//!
use crate::core::config::{self, AssistantConfig, Credential};
use crate::core::error::{NavigoError, Result};
use clap::Parser;
use serde_json::json;
use tracing::debug;

pub mod action;
pub mod fallback;
pub mod gateway;
pub mod prompt;
pub mod request;

use action::ActionTag;
use gateway::Gateway;
use request::BridgeRequest;

/// # Bridge Command Arguments (`BridgeArgs`)
#[derive(Parser, Debug)]
pub struct BridgeArgs {
    /// JSON request: {prompt, language, userProfile, transportMode, expenses, appContext}.
    pub request: String,

    /// Credential for the generative model API.
    #[arg(long = "api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// # Handle Bridge Command (`handle_bridge`)
///
/// Runs the chat pipeline and writes the outcome in the caller's JSON format.
///
/// ## Returns
///
/// * `Ok(())` after printing `{"response": ...}` to stdout.
/// * `Err(NavigoError::Reported)` after printing `{"error": ...}` to stderr, so that
///   `main` only sets the exit status.
pub async fn handle_bridge(args: BridgeArgs) -> Result<()> {
    match run_bridge(args).await {
        Ok(response) => {
            println!("{}", json!({ "response": response }));
            Ok(())
        }
        Err(e) => {
            debug!("Bridge request failed: {:?}", e);
            eprintln!("{}", json!({ "error": format!("{:#}", e) }));
            Err(NavigoError::Reported.into())
        }
    }
}

async fn run_bridge(args: BridgeArgs) -> Result<String> {
    let request = BridgeRequest::parse(&args.request)?;
    let mut config = config::load_config()?;
    config.assistant.api_key = Credential::from_option(args.api_key);
    answer(&request, config.assistant).await
}

/// Composes the prompt for `request` and obtains a reply through the gateway.
pub async fn answer(request: &BridgeRequest, assistant: AssistantConfig) -> Result<String> {
    let context = request.context();
    let system_prompt = prompt::compose_prompt(&context);
    debug!(
        "Composed system prompt ({} bytes) for language {:?}",
        system_prompt.len(),
        context.language
    );

    let gateway = Gateway::new(assistant)?;
    let response = gateway.respond(&system_prompt, request.utterance()).await?;

    if let Some((_, tag)) = ActionTag::extract_trailing(&response) {
        debug!(action = tag.name(), "Reply carries an app action");
    }
    Ok(response)
}
