//! # Translation Providers
//!
//! File: cli/src/commands/translate/provider.rs
//!
//! ## Overview
//!
//! `Translate` is the seam between the batch logic and the network. The production
//! implementation, `GoogleTranslate`, posts one form-encoded request per batch to
//! the v2 translation endpoint:
//!
//! ```text
//! POST {base_url}/language/translate/v2?key=<credential>
//! q=<text 1>&q=<text 2>&...&target=<lang>&format=text
//! ```
//!
//! and expects `{"data": {"translations": [{"translatedText": "..."}, ...]}}` back,
//! in request order.
//!
use crate::core::config::{Credential, TranslatorConfig};
use crate::core::error::{NavigoError, Result};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Translates a batch of texts into `target`, one output per input, in order.
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate_batch(&self, texts: &[String], target: &str) -> Result<Vec<String>>;
}

#[derive(Deserialize, Debug, Default)]
struct TranslateResponse {
    #[serde(default)]
    data: TranslateData,
}

#[derive(Deserialize, Debug, Default)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize, Debug)]
struct Translation {
    #[serde(rename = "translatedText", default)]
    translated_text: String,
}

pub struct GoogleTranslate {
    client: Client,
    endpoint: String,
    api_key: Credential,
}

impl GoogleTranslate {
    /// # Errors
    ///
    /// `NavigoError::Config` when no credential is configured.
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            NavigoError::Config("GOOGLE_TRANSLATE_API_KEY is required".to_string())
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            endpoint: format!(
                "{}/language/translate/v2",
                config.base_url.trim_end_matches('/')
            ),
            api_key,
        })
    }
}

#[async_trait]
impl Translate for GoogleTranslate {
    async fn translate_batch(&self, texts: &[String], target: &str) -> Result<Vec<String>> {
        let mut form: Vec<(&str, &str)> = texts.iter().map(|t| ("q", t.as_str())).collect();
        form.push(("target", target));
        form.push(("format", "text"));

        debug!("POST {} ({} texts -> '{}')", self.endpoint, texts.len(), target);
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.expose())])
            .form(&form)
            .send()
            .await
            .map_err(NavigoError::http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(NavigoError::Provider(format!(
                "Translation API returned HTTP {status}: {}",
                body.trim()
            )));
        }

        let parsed: TranslateResponse = response.json().await.map_err(NavigoError::http)?;
        Ok(parsed
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect())
    }
}
