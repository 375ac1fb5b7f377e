//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// How `prompt` values that are not JSON strings are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonStringPolicy {
    /// Accept non-empty values and render them as compact JSON text
    #[default]
    Render,
    /// Ignore anything that is not a string
    Skip,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Key looked up on each JSON object
    pub prompt_key: String,

    /// File extension to match, without the leading dot (case-insensitive)
    pub extension: String,

    /// Descend into symlinked directories
    pub follow_links: bool,

    /// Visit files before sub-directories, each ordered by name.
    /// When false the filesystem listing order is used.
    pub sort_entries: bool,

    /// Treatment of non-string prompt values
    pub non_string_prompts: NonStringPolicy,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.prompt_key.is_empty() {
            return Err(ExtractorError::Config(
                "prompt_key must not be empty".to_string(),
            ));
        }
        if self.extension.is_empty() {
            return Err(ExtractorError::Config(
                "extension must not be empty".to_string(),
            ));
        }
        if self.extension.contains('.') {
            return Err(ExtractorError::Config(format!(
                "extension '{}' must not contain a dot",
                self.extension
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            prompt_key: "prompt".to_string(),
            extension: "json".to_string(),
            follow_links: false,
            sort_entries: true,
            non_string_prompts: NonStringPolicy::Render,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.prompt_key, "prompt");
        assert_eq!(config.extension, "json");
    }

    #[test]
    fn test_empty_prompt_key_rejected() {
        let config = ExtractorConfig {
            prompt_key: String::new(),
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let config = ExtractorConfig {
            extension: ".json".to_string(),
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("non_string_prompts = \"skip\"\n").unwrap();
        assert_eq!(config.non_string_prompts, NonStringPolicy::Skip);
        assert_eq!(config.prompt_key, "prompt");
        assert!(config.sort_entries);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig {
            follow_links: true,
            ..ExtractorConfig::default()
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = ExtractorConfig::from_toml("follow_links = \"sometimes\"");
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }
}
