//! # String Tables
//!
//! File: cli/src/commands/translate/table.rs
//!
//! A string table is one language's UI strings: a flat JSON object mapping keys to
//! strings. Key order is the file's order and survives a read/write cycle.
//!
use crate::core::error::{NavigoError, Result};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: Vec<(String, String)>,
}

impl StringTable {
    /// Parses a JSON object whose values are all strings.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| NavigoError::Input(format!("String table is not valid JSON: {e}")))?;
        let Value::Object(map) = value else {
            anyhow::bail!(NavigoError::Input(
                "String table must be a JSON object".to_string()
            ));
        };

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::String(text) => entries.push((key, text)),
                other => anyhow::bail!(NavigoError::Input(format!(
                    "Value for key '{key}' must be a string, found {other}"
                ))),
            }
        }
        Ok(Self { entries })
    }

    /// Pretty-printed JSON (2-space indent, non-ASCII kept as-is).
    pub fn to_json_pretty(&self) -> Result<String> {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
