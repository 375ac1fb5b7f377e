//! promptsift Extractor
//!
//! Collects `prompt` values from a tree of JSON files and writes the unique
//! ones to a quoted, comma-separated text file.
//!
//! # Overview
//!
//! Every file under the root whose name ends in `.json` (any case) is read,
//! decoded as UTF-8 and parsed. A top-level object contributes its own
//! `prompt`; a top-level array contributes the `prompt` of each object it
//! holds. Files that fail to decode or parse are reported and skipped.
//!
//! # Architecture
//!
//! ```text
//! walk → parse each file → collect prompts → dedup → write
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use promptsift_extractor::{Extractor, ExtractorConfig};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default());
//! let report = extractor.run(Path::new("./data"), Path::new("./prompts.txt"))?;
//!
//! println!("Found: {} JSON files", report.files_found);
//! println!("Unique: {} prompts", report.unique_prompts);
//! println!("Skipped: {} files", report.failures.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod progress;
mod types;
mod walker;
mod writer;


pub use config::{ExtractorConfig, NonStringPolicy};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use parser::{extract_prompts, is_non_empty, parse_document};
pub use progress::{NoopProgress, ProgressSink};
pub use types::{
    ExtractionReport, FailureKind, FileFailure, Prompt, PromptCollection, PromptKind,
};
pub use walker::{discover_json_files, has_extension};
pub use writer::{render_prompts, write_prompts, write_to_path, SEPARATOR};
