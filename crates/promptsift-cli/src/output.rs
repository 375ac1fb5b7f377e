//! Status-channel formatting for the CLI.

use colored::*;
use promptsift_extractor::{ExtractionReport, FileFailure};
use std::path::Path;

/// Width of the rule printed under the run header.
const RULE_WIDTH: usize = 50;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Lines printed before the scan starts.
    pub fn header(&self, root: &Path, output: &Path) -> String {
        format!(
            "Searching for JSON files in: {}\nOutput will be written to: {}\n{}",
            root.display(),
            output.display(),
            "-".repeat(RULE_WIDTH)
        )
    }

    /// Line describing a skipped file.
    pub fn file_failure(&self, failure: &FileFailure) -> String {
        let msg = if failure.kind.is_content_error() {
            format!("Error reading {}: {}", failure.path.display(), failure.message)
        } else {
            format!(
                "Unexpected error with {}: {}",
                failure.path.display(),
                failure.message
            )
        };
        self.colorize(&msg, "yellow")
    }

    /// Summary printed after a successful run.
    pub fn summary(&self, report: &ExtractionReport) -> String {
        format!(
            "Successfully processed {} JSON files\nExtracted {} unique prompts (from {} total prompts)\nOutput written to: {}",
            report.files_found,
            report.unique_prompts,
            report.prompts_extracted,
            report.output_path.display()
        )
    }

    /// Final line of a successful run.
    pub fn completed(&self) -> String {
        self.colorize("✅ Extraction completed successfully!", "green")
    }

    /// Final line of a failed run.
    pub fn failed(&self) -> String {
        self.colorize("❌ Extraction failed!", "red")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(message, "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
