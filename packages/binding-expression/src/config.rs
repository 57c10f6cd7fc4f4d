/**
 * Parser Configuration
 */

use serde::{Deserialize, Serialize};

/// Options for an [`ExpressionParser`](crate::ExpressionParser) instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    /// Memoize parses per grammar mode. Disabled, every call re-parses.
    pub cache: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { cache: true }
    }
}

impl ParserConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
