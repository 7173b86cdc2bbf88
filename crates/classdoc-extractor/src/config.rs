//! Configuration for the Extractor

use crate::normalizer::MARKUP_CHARS;
use scraper::Selector;
use serde::{Deserialize, Serialize};

/// Default replacement for `<pre>` blocks
pub const DEFAULT_PLACEHOLDER: &str = "code-example";

/// Default selector for the class description of a rendered Javadoc page.
///
/// Covers the classic layout (`div.description`) and the HTML5 layout
/// (`section.class-description`).
pub const DEFAULT_DESCRIPTION_SELECTOR: &str =
    "div.description div.block, section.class-description div.block, #class-description div.block";

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Token that replaces code blocks before segmentation
    pub placeholder: String,

    /// Turn paragraph breaks into sentence ends before stripping tags
    pub paragraph_breaks: bool,

    /// Minimum length of an emitted sentence, in characters
    pub min_sentence_chars: usize,

    /// CSS selector for description blocks in markup documents
    pub description_selector: String,

    /// Key each markup description block separately (`Key#1`, `Key#2`, ...)
    pub fragment_keys: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.placeholder.trim().is_empty() {
            return Err("placeholder must not be empty".to_string());
        }
        if self.placeholder.chars().any(char::is_whitespace) {
            return Err("placeholder must be a single token".to_string());
        }
        if self.placeholder.contains(MARKUP_CHARS) {
            return Err("placeholder must not contain '<' or '&'".to_string());
        }
        if self.min_sentence_chars < 2 {
            return Err("min_sentence_chars must be at least 2".to_string());
        }
        Selector::parse(&self.description_selector).map_err(|e| {
            format!("invalid description_selector '{}': {}", self.description_selector, e)
        })?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            paragraph_breaks: true,
            min_sentence_chars: 2,
            description_selector: DEFAULT_DESCRIPTION_SELECTOR.to_string(),
            fragment_keys: false,
        }
    }
}
