//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an extraction run
///
/// Problems with individual input files are not errors at this level; they are
/// recorded as [`FileFailure`](crate::FileFailure)s and the run carries on.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The output file could not be created or written
    #[error("Error writing to {}: {source}", .path.display())]
    Output {
        /// Destination that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractorError::Output {
            path: path.into(),
            source,
        }
    }
}
