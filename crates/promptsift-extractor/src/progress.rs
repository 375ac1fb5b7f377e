//! Observation hooks for a running extraction

use crate::types::FileFailure;
use std::path::Path;

/// Receives progress events while the Extractor walks the tree
///
/// Every method has a no-op default so implementors only override what they
/// care about.
pub trait ProgressSink {
    /// A file matching the extension was found and is about to be read
    fn file_found(&mut self, _path: &Path) {}

    /// A file or directory was skipped
    fn file_failed(&mut self, _failure: &FileFailure) {}
}

/// Sink that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {}

impl<T: ProgressSink + ?Sized> ProgressSink for &mut T {
    fn file_found(&mut self, path: &Path) {
        (**self).file_found(path);
    }

    fn file_failed(&mut self, failure: &FileFailure) {
        (**self).file_failed(failure);
    }
}
