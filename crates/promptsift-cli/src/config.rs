//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use promptsift_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "PROMPTSIFT_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    /// Get the configuration file path.
    ///
    /// `PROMPTSIFT_CONFIG` wins; otherwise `~/.promptsift/config.toml`.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".promptsift").join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults.
    ///
    /// A file named by `PROMPTSIFT_CONFIG` must exist; the default location is
    /// optional.
    pub fn load() -> Result<Self> {
        let explicit = env::var_os(CONFIG_ENV).is_some();
        let path = match Self::path() {
            Ok(path) => path,
            Err(_) if !explicit => return Ok(Self::default()),
            Err(e) => return Err(e),
        };

        if path.exists() || explicit {
            let contents = fs::read_to_string(&path).map_err(|e| {
                CliError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            Self::from_toml(&contents)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config
            .extractor
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "error".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptsift_extractor::NonStringPolicy;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.log_filter, "error");
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = Config::from_toml("").unwrap();
        assert!(config.settings.color);
        assert_eq!(config.extractor.prompt_key, "prompt");
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
            [settings]
            color = false

            [extractor]
            non_string_prompts = "skip"
            "#,
        )
        .unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.log_filter, "error");
        assert_eq!(config.extractor.non_string_prompts, NonStringPolicy::Skip);
        assert!(config.extractor.sort_entries);
    }

    #[test]
    fn test_invalid_extractor_section_rejected() {
        let result = Config::from_toml("[extractor]\nextension = \".json\"\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = Config::from_toml("[settings\ncolor = ");
        assert!(matches!(result, Err(CliError::Toml(_))));
    }
}
