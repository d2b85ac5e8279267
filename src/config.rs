//! Tunables for the body parsing pipeline

use serde::{Deserialize, Serialize};

/// Words per minute used for reading time estimates
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 225;

/// Characters kept in a stored body preview
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Options for [`parse_body_with`](crate::parse_body_with)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum characters in the parsed preview
    pub preview_chars: usize,

    /// Reading speed used for the reading time estimate
    pub words_per_minute: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl ParserConfig {
    /// Load a configuration from JSON, defaulting missing fields
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::ParseError::Json(e.to_string()))
    }
}
