//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::{extract_prompts, parse_document};
use crate::progress::{NoopProgress, ProgressSink};
use crate::types::{ExtractionReport, FailureKind, FileFailure, Prompt, PromptCollection};
use crate::walker::discover_json_files;
use crate::writer::write_to_path;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// The Extractor collects prompts from a directory tree and writes them out
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

/// Prompts gathered during a walk, before deduplication
#[derive(Debug, Default)]
struct Scan {
    files_found: usize,
    prompts: Vec<Prompt>,
    failures: Vec<FileFailure>,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Scan `root`, then write the unique prompts to `output`
    pub fn run(&self, root: &Path, output: &Path) -> Result<ExtractionReport, ExtractorError> {
        self.run_with_sink(root, output, NoopProgress)
    }

    /// Like [`run`](Self::run), reporting progress to `sink` as files are visited
    pub fn run_with_sink<P: ProgressSink>(
        &self,
        root: &Path,
        output: &Path,
        mut sink: P,
    ) -> Result<ExtractionReport, ExtractorError> {
        self.config.validate()?;

        info!("Starting extraction in '{}'", root.display());

        let scan = self.scan(root, &mut sink);
        let prompts_extracted = scan.prompts.len();
        let collection = PromptCollection::from_prompts(scan.prompts);

        if let Err(e) = write_to_path(output, &collection) {
            error!("{}", e);
            return Err(e);
        }

        info!(
            "Wrote {} unique prompts ({} total) from {} files to '{}'",
            collection.len(),
            prompts_extracted,
            scan.files_found,
            output.display()
        );

        Ok(ExtractionReport {
            files_found: scan.files_found,
            prompts_extracted,
            unique_prompts: collection.len(),
            failures: scan.failures,
            output_path: output.to_path_buf(),
        })
    }

    /// Walk `root` and gather every qualifying prompt in traversal order
    pub fn collect(&self, root: &Path) -> Result<PromptCollection, ExtractorError> {
        self.config.validate()?;
        let scan = self.scan(root, &mut NoopProgress);
        Ok(PromptCollection::from_prompts(scan.prompts))
    }

    fn scan<P: ProgressSink>(&self, root: &Path, sink: &mut P) -> Scan {
        let mut scan = Scan::default();

        for entry in discover_json_files(root, &self.config) {
            let path = match entry {
                Ok(path) => path,
                Err(failure) => {
                    record_failure(&mut scan, sink, failure);
                    continue;
                }
            };

            scan.files_found += 1;
            sink.file_found(&path);
            debug!("Reading '{}'", path.display());

            match self.process_file(&path) {
                Ok(prompts) => scan.prompts.extend(prompts),
                Err(failure) => record_failure(&mut scan, sink, failure),
            }
        }

        scan
    }

    fn process_file(&self, path: &Path) -> Result<Vec<Prompt>, FileFailure> {
        let bytes = fs::read(path)
            .map_err(|e| FileFailure::new(path, FailureKind::Read, e.to_string()))?;
        let document = parse_document(path, &bytes)?;
        Ok(extract_prompts(&document, &self.config))
    }
}

fn record_failure<P: ProgressSink>(scan: &mut Scan, sink: &mut P, failure: FileFailure) {
    warn!("Skipping {}", failure);
    sink.file_failed(&failure);
    scan.failures.push(failure);
}
