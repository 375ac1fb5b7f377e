//! Extract command implementation.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use promptsift_extractor::{ExtractionReport, Extractor, ExtractorError, FileFailure, ProgressSink};

/// Prints skipped files as the scan reaches them.
struct ConsoleProgress<'a> {
    formatter: &'a Formatter,
}

impl ProgressSink for ConsoleProgress<'_> {
    fn file_failed(&mut self, failure: &FileFailure) {
        println!("{}", self.formatter.file_failure(failure));
    }
}

/// Execute the extraction.
pub fn execute_extract(
    cli: &Cli,
    config: &Config,
    formatter: &Formatter,
) -> Result<ExtractionReport> {
    if !cli.root_directory.exists() {
        return Err(CliError::RootNotFound(cli.root_directory.clone()));
    }

    println!("{}", formatter.header(&cli.root_directory, &cli.output_file));

    let extractor = Extractor::new(config.extractor.clone());
    let sink = ConsoleProgress { formatter };

    match extractor.run_with_sink(&cli.root_directory, &cli.output_file, sink) {
        Ok(report) => {
            println!("{}", formatter.summary(&report));
            println!();
            println!("{}", formatter.completed());
            Ok(report)
        }
        Err(e @ ExtractorError::Output { .. }) => {
            println!("{}", formatter.error(&e.to_string()));
            println!();
            println!("{}", formatter.failed());
            Err(CliError::ExtractionFailed)
        }
        Err(e) => Err(e.into()),
    }
}
