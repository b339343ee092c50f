use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// On-disk user settings (`config.json`).
///
/// Only `geminiApiKey` is meaningful to the program; any other field a user
/// added by hand is kept in `extra` and written back verbatim on save.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Gemini API key (secret, opaque to the program)
    #[serde(rename = "geminiApiKey", default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    /// Unknown fields, preserved across load/save
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Config {
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
