//! Recursive discovery of candidate JSON files

use crate::config::ExtractorConfig;
use crate::types::{FailureKind, FileFailure};
use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Walk `root` and yield every file whose extension matches the configuration
///
/// The root itself is never yielded. Entries that cannot be listed come back as
/// [`FailureKind::Walk`] failures so the caller can report them and move on.
pub fn discover_json_files(
    root: &Path,
    config: &ExtractorConfig,
) -> impl Iterator<Item = Result<PathBuf, FileFailure>> {
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(config.follow_links);
    if config.sort_entries {
        walker = walker.sort_by(files_first);
    }

    let extension = config.extension.clone();
    walker.into_iter().filter_map(move |entry| match entry {
        Ok(entry) => {
            if is_candidate(&entry) && has_extension(entry.path(), &extension) {
                Some(Ok(entry.into_path()))
            } else {
                None
            }
        }
        Err(e) => {
            let path = e.path().map(Path::to_path_buf).unwrap_or_default();
            Some(Err(FileFailure::new(path, FailureKind::Walk, e.to_string())))
        }
    })
}

/// True when the file name ends in `.<extension>`, compared case-insensitively
///
/// A bare dotfile such as `.json` matches too.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name().map(OsStr::as_encoded_bytes) else {
        return false;
    };
    let ext = extension.as_bytes();
    if name.len() <= ext.len() {
        return false;
    }
    let (stem, tail) = name.split_at(name.len() - ext.len());
    stem.ends_with(b".") && tail.eq_ignore_ascii_case(ext)
}

// Anything that isn't a directory, including symlinks to files and dangling links.
fn is_candidate(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
