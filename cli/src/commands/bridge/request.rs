//! # Bridge Request Parsing
//!
//! File: cli/src/commands/bridge/request.rs
//!
//! ## Overview
//!
//! The host application passes one JSON object per invocation:
//!
//! ```json
//! {
//!   "prompt": "Where is my bus?",
//!   "language": "ta",
//!   "userProfile": { "name": "Meena" },
//!   "transportMode": "bus",
//!   "expenses": [{ "amount": 40 }, { "amount": "12.5" }],
//!   "appContext": { "darkMode": true, "highContrast": false }
//! }
//! ```
//!
//! Every field is optional. The wire shape (`BridgeRequest`) is deliberately loose,
//! holding raw JSON values, and `BridgeRequest::context` normalizes it into the
//! `RequestContext` the prompt composer consumes. Normalization never fails:
//! values of the wrong type degrade to "absent" (or to zero for amounts).
//!
use crate::core::error::{NavigoError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const DEFAULT_LANGUAGE: &str = "en";

/// The JSON request exactly as received from the caller.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeRequest {
    pub prompt: Option<Value>,
    /// `None` when the key is missing, `Some(Value::Null)` for an explicit null.
    #[serde(deserialize_with = "present")]
    pub language: Option<Value>,
    pub user_profile: Option<Value>,
    pub transport_mode: Option<Value>,
    pub expenses: Option<Value>,
    pub app_context: Option<Value>,
}

/// Per-request context rendered into the system prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    /// Preferred language code. `"en"` when the key is missing; `None` when the
    /// caller sent null, an empty string or a non-string value.
    pub language: Option<String>,
    pub user_name: Option<String>,
    pub transport_mode: Option<String>,
    pub expenses: Vec<Expense>,
    pub accessibility: Accessibility,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expense {
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accessibility {
    pub dark_mode: bool,
    pub high_contrast: bool,
}

impl BridgeRequest {
    /// Parses the raw command-line argument.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| NavigoError::Input(format!("Request is not valid JSON: {e}")))?;
        if !value.is_object() {
            anyhow::bail!(NavigoError::Input(
                "Request must be a JSON object".to_string()
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| NavigoError::Input(format!("Malformed request: {e}")).into())
    }

    /// The user's utterance; empty when absent or not a string.
    pub fn utterance(&self) -> &str {
        self.prompt.as_ref().and_then(Value::as_str).unwrap_or("")
    }

    pub fn context(&self) -> RequestContext {
        let language = match &self.language {
            None => Some(DEFAULT_LANGUAGE.to_string()),
            Some(value) => value.as_str().and_then(non_empty),
        };
        let user_name = self
            .user_profile
            .as_ref()
            .and_then(|profile| profile.get("name"))
            .and_then(Value::as_str)
            .and_then(non_empty);
        let transport_mode = self
            .transport_mode
            .as_ref()
            .and_then(Value::as_str)
            .and_then(non_empty);
        let expenses = self
            .expenses
            .as_ref()
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| Expense {
                        amount: parse_amount(entry.get("amount")),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let flag = |name: &str| {
            self.app_context
                .as_ref()
                .and_then(|ctx| ctx.get(name))
                .and_then(Value::as_bool)
                .unwrap_or(false)
        };

        RequestContext {
            language,
            user_name,
            transport_mode,
            expenses,
            accessibility: Accessibility {
                dark_mode: flag("darkMode"),
                high_contrast: flag("highContrast"),
            },
        }
    }
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Values are rendered as sent; only the empty string counts as absent.
fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Numbers and numeric strings count; anything else, including NaN and
/// infinities, is zero.
fn parse_amount(value: Option<&Value>) -> f64 {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}
