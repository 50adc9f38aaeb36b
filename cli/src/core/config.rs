//! # Navigo Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the non-secret settings for both pipelines and carries the
//! credentials that `main` resolves from flags or the environment. Nothing below
//! the command handlers reads the process environment: the gateway and the
//! translator receive everything through the structs defined here.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.navigo.toml` in the current directory or ancestors
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `<config dir>/navigo/config.toml`
//! 3. Default values defined in the code
//!
//! Each file is parsed into an all-`Option` shape and laid over the defaults field
//! by field, so a project file only needs to name the settings it changes.
//! Credentials are never read from files.
//!
//! ## Examples
//!
//! ```toml
//! [assistant]
//! model = "gemini-pro"
//! timeout_secs = 10
//!
//! [translator]
//! i18n_dir = "~/work/navigo/public/i18n"
//! batch_size = 50
//! ```
//!
//! ```rust
//! let mut cfg = config::load_config()?;
//! cfg.assistant.api_key = Credential::from_option(args.api_key);
//! ```
//!
use crate::core::error::{NavigoError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fmt;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".navigo.toml";

/// A provider credential. `Debug` output is redacted so the effective
/// configuration can be logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a credential, treating an empty or blank value as absent.
    pub fn from_option(value: Option<String>) -> Option<Self> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Credential)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Effective configuration for one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub translator: TranslatorConfig,
}

/// Settings for the generative model gateway (`navigo bridge`).
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    /// Scheme and host of the generative-content API.
    pub base_url: String,
    /// Model name placed in the `models/{model}:generateContent` path.
    pub model: String,
    pub timeout_secs: u64,
    pub max_output_tokens: u32,
    pub temperature: f64,
    /// Injected from `--api-key` / `GEMINI_API_KEY`.
    pub api_key: Option<Credential>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-pro".to_string(),
            timeout_secs: 10,
            max_output_tokens: 500,
            temperature: 0.7,
            api_key: None,
        }
    }
}

/// Settings for the batch string-table translator (`navigo translate`).
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorConfig {
    pub base_url: String,
    /// Directory holding `<lang>.json` string tables. Used for the default
    /// `--input` and `--output` paths.
    pub i18n_dir: String,
    /// Language of the authoritative table inside `i18n_dir`.
    pub source_lang: String,
    /// Entries per provider request.
    pub batch_size: usize,
    pub timeout_secs: u64,
    /// Injected from `--api-key` / `GOOGLE_TRANSLATE_API_KEY`.
    pub api_key: Option<Credential>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translation.googleapis.com".to_string(),
            i18n_dir: "public/i18n".to_string(),
            source_lang: "en".to_string(),
            batch_size: 50,
            timeout_secs: 20,
            api_key: None,
        }
    }
}

impl TranslatorConfig {
    /// Path of the string table for `lang` inside the configured i18n directory.
    pub fn table_path(&self, lang: &str) -> PathBuf {
        Path::new(&self.i18n_dir).join(format!("{lang}.json"))
    }
}

// --- On-disk shape: every field optional so files can be partial ---

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    assistant: AssistantFile,
    #[serde(default)]
    translator: TranslatorFile,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct AssistantFile {
    base_url: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
    max_output_tokens: Option<u32>,
    temperature: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TranslatorFile {
    base_url: Option<String>,
    i18n_dir: Option<String>,
    source_lang: Option<String>,
    batch_size: Option<usize>,
    timeout_secs: Option<u64>,
}

impl Config {
    fn apply(&mut self, layer: FileConfig) {
        let a = layer.assistant;
        let assistant = &mut self.assistant;
        if let Some(v) = a.base_url {
            assistant.base_url = v;
        }
        if let Some(v) = a.model {
            assistant.model = v;
        }
        if let Some(v) = a.timeout_secs {
            assistant.timeout_secs = v;
        }
        if let Some(v) = a.max_output_tokens {
            assistant.max_output_tokens = v;
        }
        if let Some(v) = a.temperature {
            assistant.temperature = v;
        }

        let t = layer.translator;
        let translator = &mut self.translator;
        if let Some(v) = t.base_url {
            translator.base_url = v;
        }
        if let Some(v) = t.i18n_dir {
            translator.i18n_dir = v;
        }
        if let Some(v) = t.source_lang {
            translator.source_lang = v;
        }
        if let Some(v) = t.batch_size {
            translator.batch_size = v;
        }
        if let Some(v) = t.timeout_secs {
            translator.timeout_secs = v;
        }
    }
}

/// Loads configuration for the current working directory.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(&current_dir)
}

/// Loads configuration, searching for a project file from `start_dir` upwards.
pub fn load_config_from(start_dir: &Path) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file (.navigo.toml) found.");
            None
        }
    };

    let mut config = Config::default();
    for layer in [user_config, project_config].into_iter().flatten() {
        config.apply(layer);
    }
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<FileConfig>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Navigo", "navigo") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let candidate = path.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) {
    config.translator.i18n_dir = shellexpand::tilde(&config.translator.i18n_dir).into_owned();
    debug!("Expanded i18n directory: {}", config.translator.i18n_dir);
}

fn validate_base_url(section: &str, url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!(NavigoError::Config(format!(
            "[{section}] base_url must be an http(s) URL, got '{url}'"
        ))))
    }
}

fn validate_config(config: &Config) -> Result<()> {
    let assistant = &config.assistant;
    validate_base_url("assistant", &assistant.base_url)?;
    if assistant.model.trim().is_empty() {
        return Err(anyhow!(NavigoError::Config(
            "[assistant] model cannot be empty".to_string()
        )));
    }
    if assistant.timeout_secs == 0 {
        return Err(anyhow!(NavigoError::Config(
            "[assistant] timeout_secs must be greater than zero".to_string()
        )));
    }
    if !(0.0..=2.0).contains(&assistant.temperature) {
        return Err(anyhow!(NavigoError::Config(format!(
            "[assistant] temperature must be between 0.0 and 2.0, got {}",
            assistant.temperature
        ))));
    }

    let translator = &config.translator;
    validate_base_url("translator", &translator.base_url)?;
    if translator.batch_size == 0 {
        return Err(anyhow!(NavigoError::Config(
            "[translator] batch_size must be greater than zero".to_string()
        )));
    }
    if translator.timeout_secs == 0 {
        return Err(anyhow!(NavigoError::Config(
            "[translator] timeout_secs must be greater than zero".to_string()
        )));
    }
    Ok(())
}
