//! # Navigo String-Table Translator (`navigo translate`)
//!
//! File: cli/src/commands/translate/mod.rs
//!
//! ## Overview
//!
//! Produces a localized copy of the app's UI string table through a machine
//! translation API.
//!
//! ```bash
//! # public/i18n/en.json -> public/i18n/hi.json
//! navigo translate --lang hi
//!
//! # Explicit paths
//! navigo translate --lang ta --input strings/en.json --output build/ta.json
//! ```
//!
//! ## Architecture
//!
//! - `table`: ordered key/value string tables read from and written to JSON
//! - `provider`: the `Translate` trait and the HTTP client implementing it
//! - `batch`: chunked translation with per-entry fallback to the source text
//!
//! The run fails fast: a missing input, a missing credential, or any provider
//! error ends it with exit status 1. Output is written once, after every chunk has
//! been translated, so a failed run leaves no partial file behind.
//!
use crate::common::fs::io;
use crate::core::config::{self, Credential, TranslatorConfig};
use crate::core::error::{NavigoError, Result};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

pub mod batch;
pub mod provider;
pub mod table;

use provider::GoogleTranslate;
use table::StringTable;

/// # Translate Command Arguments (`TranslateArgs`)
#[derive(Parser, Debug)]
pub struct TranslateArgs {
    /// Target language code (e.g., hi, ta, fr).
    #[arg(long)]
    pub lang: String,

    /// Source string table. Defaults to `<i18n_dir>/<source_lang>.json`
    /// (`public/i18n/en.json` unless configured otherwise).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output string table. Defaults to `<i18n_dir>/<lang>.json`.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Credential for the translation API.
    #[arg(long = "api-key", env = "GOOGLE_TRANSLATE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// # Handle Translate Command (`handle_translate`)
///
/// Loads configuration, injects the credential, runs the translation and reports
/// where the result was written.
pub async fn handle_translate(args: TranslateArgs) -> Result<()> {
    let mut config = config::load_config()?;
    config.translator.api_key = Credential::from_option(args.api_key.clone());

    let output_path = run_translate(&args, &config.translator).await?;
    println!("Wrote translations to {}", output_path.display());
    Ok(())
}

async fn run_translate(args: &TranslateArgs, config: &TranslatorConfig) -> Result<PathBuf> {
    validate_lang(&args.lang)?;
    let input_path = args
        .input
        .clone()
        .unwrap_or_else(|| config.table_path(&config.source_lang));
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| config.table_path(&args.lang));
    info!(
        "Translating {} -> {} ({})",
        input_path.display(),
        output_path.display(),
        args.lang
    );

    let raw = io::read_input_file(&input_path)?;
    let source = StringTable::from_json_str(&raw)
        .with_context(|| format!("Failed to load string table {}", input_path.display()))?;

    let provider = GoogleTranslate::new(config)?;
    let translated =
        batch::translate_table(&provider, &source, &args.lang, config.batch_size).await?;

    io::write_string_to_file(&output_path, &translated.to_json_pretty()?)?;
    info!("Translated {} strings", translated.len());
    Ok(output_path)
}

/// Language codes end up in default file names, so only letters, digits and `-`.
fn validate_lang(lang: &str) -> Result<()> {
    if lang.is_empty() || !lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        anyhow::bail!(NavigoError::Input(format!(
            "Invalid target language code: '{lang}'"
        )));
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn args(lang: &str, input: Option<PathBuf>, output: Option<PathBuf>) -> TranslateArgs {
        TranslateArgs {
            lang: lang.to_string(),
            input,
            output,
            api_key: None,
        }
    }

    #[test]
    fn test_parses_translate_args() {
        let parsed = TranslateArgs::try_parse_from(["translate", "--lang", "hi"]).unwrap();
        assert_eq!(parsed.lang, "hi");
        assert!(parsed.input.is_none());
        assert!(parsed.output.is_none());

        assert!(TranslateArgs::try_parse_from(["translate"]).is_err());
    }

    #[test]
    fn test_validate_lang() {
        assert!(validate_lang("hi").is_ok());
        assert!(validate_lang("zh-TW").is_ok());
        assert!(validate_lang("").is_err());
        assert!(validate_lang("../etc").is_err());
    }

    #[tokio::test]
    async fn test_missing_input_fails_before_credential_check() {
        let dir = tempdir().unwrap();
        let config = TranslatorConfig {
            i18n_dir: dir.path().to_string_lossy().into_owned(),
            ..Default::default()
        };
        let err = run_translate(&args("fr", None, None), &config)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Input file not found"));
    }

    #[tokio::test]
    async fn test_missing_credential_is_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"a": "Hello"}"#).unwrap();
        let config = TranslatorConfig {
            i18n_dir: dir.path().to_string_lossy().into_owned(),
            ..Default::default()
        };
        let err = run_translate(&args("fr", None, None), &config)
            .await
            .unwrap_err();
        assert!(crate::core::error::is_config_error(&err));
        assert!(!dir.path().join("fr.json").exists());
    }

    #[tokio::test]
    async fn test_round_trip_writes_default_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"a": "Hello", "b": "Bye"}"#).unwrap();

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Regex("^/language/translate/v2".to_string()))
            .match_query(Matcher::UrlEncoded("key".into(), "tr-key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"data": {"translations": [
                    {"translatedText": ""},
                    {"translatedText": "Au revoir"}
                ]}})
                .to_string(),
            )
            .create_async()
            .await;

        let config = TranslatorConfig {
            base_url: server.url(),
            i18n_dir: dir.path().to_string_lossy().into_owned(),
            api_key: Credential::from_option(Some("tr-key".to_string())),
            ..Default::default()
        };
        let written = run_translate(&args("fr", None, None), &config).await.unwrap();
        assert_eq!(written, dir.path().join("fr.json"));

        let out = StringTable::from_json_str(&fs::read_to_string(&written).unwrap()).unwrap();
        assert_eq!(out.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(out.get("a"), Some("Hello"));
        assert_eq!(out.get("b"), Some("Au revoir"));
    }

    #[tokio::test]
    async fn test_provider_error_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("source.json");
        let output = dir.path().join("nested/out.json");
        fs::write(&input, r#"{"a": "Hello"}"#).unwrap();

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let config = TranslatorConfig {
            base_url: server.url(),
            api_key: Credential::from_option(Some("tr-key".to_string())),
            ..Default::default()
        };
        let result = run_translate(&args("de", Some(input), Some(output.clone())), &config).await;
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
