//! Data model for extraction runs

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// JSON type a prompt value was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    /// JSON string, written verbatim
    String,
    /// JSON number
    Number,
    /// JSON boolean
    Bool,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

/// A single extracted prompt
///
/// Two prompts are equal only when both the kind and the text match, so the
/// string `"1"` and the number `1` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prompt {
    text: String,
    kind: PromptKind,
}

impl Prompt {
    /// Create a prompt from a string value
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_kind(text, PromptKind::String)
    }

    /// Create a prompt from already-rendered text of the given kind
    pub fn with_kind(text: impl Into<String>, kind: PromptKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Text written to the output file
    pub fn text(&self) -> &str {
        &self.text
    }

    /// JSON type the prompt came from
    pub fn kind(&self) -> PromptKind {
        self.kind
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered sequence of unique prompts, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptCollection {
    prompts: Vec<Prompt>,
}

impl PromptCollection {
    /// Build a collection, keeping only the first occurrence of each prompt
    pub fn from_prompts<I>(prompts: I) -> Self
    where
        I: IntoIterator<Item = Prompt>,
    {
        let mut seen = HashSet::new();
        let prompts = prompts
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();
        Self { prompts }
    }

    /// Number of unique prompts
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// True when no prompt was collected
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Iterate prompts in output order
    pub fn iter(&self) -> std::slice::Iter<'_, Prompt> {
        self.prompts.iter()
    }

    /// Prompt texts in output order
    pub fn texts(&self) -> Vec<&str> {
        self.prompts.iter().map(Prompt::text).collect()
    }
}

impl<'a> IntoIterator for &'a PromptCollection {
    type Item = &'a Prompt;
    type IntoIter = std::slice::Iter<'a, Prompt>;

    fn into_iter(self) -> Self::IntoIter {
        self.prompts.iter()
    }
}

/// Why an input file was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Contents are not valid UTF-8
    Decode,
    /// Contents are not valid JSON
    Parse,
    /// The file could not be read
    Read,
    /// A directory entry could not be listed
    Walk,
}

impl FailureKind {
    /// True for failures caused by the file's contents rather than the filesystem
    pub fn is_content_error(&self) -> bool {
        matches!(self, FailureKind::Decode | FailureKind::Parse)
    }
}

/// A recovered, per-file failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// File or directory involved
    pub path: PathBuf,

    /// Failure category
    pub kind: FailureKind,

    /// Human-readable reason
    pub message: String,
}

impl FileFailure {
    /// Create a new failure record
    pub fn new(path: impl AsRef<Path>, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Outcome of a successful extraction run
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Files matched by extension, whether or not they parsed
    pub files_found: usize,

    /// Prompts accepted before deduplication
    pub prompts_extracted: usize,

    /// Prompts written after deduplication
    pub unique_prompts: usize,

    /// Files that were skipped
    pub failures: Vec<FileFailure>,

    /// Where the prompts were written
    pub output_path: PathBuf,
}
