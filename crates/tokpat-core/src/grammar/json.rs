//! JSON deserialization for `*.tmLanguage.json` files.
//!
//! Deserializes straight from text: going through `serde_json::Value` would
//! lose repository order unless serde_json's `preserve_order` feature is on.

use super::types::Grammar;

/// Error during grammar parsing.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Grammar {
    /// Parse grammar from JSON string.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        Ok(serde_json::from_str(json)?)
    }
}
