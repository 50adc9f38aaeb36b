//! # Generative Model Gateway
//!
//! File: cli/src/commands/bridge/gateway.rs
//!
//! ## Overview
//!
//! Sends the composed system prompt and the user's words to the generative-content
//! API and returns the first candidate's text. The gateway never hands back a
//! provider failure: every unusable outcome is answered by the keyword fallback in
//! `fallback.rs`, so the caller always gets either a clean model reply or a clean
//! canned reply.
//!
//! | Outcome                              | Result                         |
//! |--------------------------------------|--------------------------------|
//! | no credential configured             | `NavigoError::Config` (raised) |
//! | HTTP 404 (API not enabled)           | fallback                       |
//! | other non-success status             | fallback                       |
//! | transport error, timeout, bad body   | fallback                       |
//! | success, zero candidates             | fallback                       |
//! | success, first candidate has text    | that text, verbatim            |
//!
use super::fallback;
use crate::core::config::{AssistantConfig, Credential};
use crate::core::error::{NavigoError, Result};
use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize, Debug)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
}

/// What a completed request to the model produced.
#[derive(Debug, PartialEq)]
enum Generation {
    Text(String),
    NotEnabled,
    NoCandidates,
}

// ============================================================================
// Gateway
// ============================================================================

/// Joins the system instructions and the user's turn into one context.
pub fn frame_prompt(system_prompt: &str, utterance: &str) -> String {
    format!("{system_prompt}\n\nUser: {utterance}\n\nAssistant:")
}

pub struct Gateway {
    client: Client,
    config: AssistantConfig,
}

impl Gateway {
    pub fn new(config: AssistantConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Answers `utterance` given the composed `system_prompt`.
    ///
    /// # Errors
    ///
    /// Only `NavigoError::Config` when no credential is configured. Everything the
    /// provider does wrong is answered with a fallback reply instead.
    pub async fn respond(&self, system_prompt: &str, utterance: &str) -> Result<String> {
        let api_key = self.config.api_key.as_ref().ok_or_else(|| {
            NavigoError::Config("GEMINI_API_KEY not set in environment".to_string())
        })?;

        let full_prompt = frame_prompt(system_prompt, utterance);
        match self.generate(api_key, &full_prompt).await {
            Ok(Generation::Text(text)) => Ok(text),
            Ok(Generation::NotEnabled) => {
                warn!("Model API returned 404 (API not enabled or unknown model); using fallback");
                Ok(fallback::fallback_response(utterance))
            }
            Ok(Generation::NoCandidates) => {
                warn!("Model API returned no candidates; using fallback reply");
                Ok(fallback::fallback_response(utterance))
            }
            Err(e) => {
                warn!("Model API error: {:#}; using fallback reply", e);
                Ok(fallback::fallback_response(utterance))
            }
        }
    }

    async fn generate(&self, api_key: &Credential, full_prompt: &str) -> Result<Generation> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: full_prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
                temperature: self.config.temperature,
            },
        };

        debug!(model = %self.config.model, "Sending generateContent request");
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key.expose())])
            .json(&body)
            .send()
            .await
            .map_err(NavigoError::http)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Generation::NotEnabled);
        }
        if !status.is_success() {
            anyhow::bail!(NavigoError::Provider(format!(
                "Model API returned HTTP {status}"
            )));
        }

        let parsed: GenerateResponse = response.json().await.map_err(NavigoError::http)?;
        let Some(first) = parsed.candidates.into_iter().next() else {
            return Ok(Generation::NoCandidates);
        };
        first
            .content
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .map(Generation::Text)
            .ok_or_else(|| {
                NavigoError::Provider("First candidate carries no text part".to_string()).into()
            })
    }
}
