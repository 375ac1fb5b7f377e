//! Error types for the CLI application.

use promptsift_extractor::ExtractorError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Root directory does not exist
    #[error("Directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extractor error
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Extraction ran but the output could not be written; already reported
    #[error("Extraction failed")]
    ExtractionFailed,

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CliError {
    /// True when the status channel has already described this error
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::ExtractionFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_message() {
        let err = CliError::RootNotFound(PathBuf::from("./missing"));
        assert_eq!(err.to_string(), "Directory './missing' does not exist");
        assert!(!err.is_reported());
    }

    #[test]
    fn test_extraction_failed_is_reported() {
        assert!(CliError::ExtractionFailed.is_reported());
    }
}
