//! Combine Model
//!
//! The values that flow through a single run: the immutable configuration,
//! the scanned file entries, the summary reported at the end, and the
//! run-level failures with their process exit codes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

/// Default output file, relative to the current directory
pub const DEFAULT_OUTPUT: &str = "output/combined_script.txt";

/// Default extension suffix to include
pub const DEFAULT_FORMAT: &str = ".py";

/// Default directory name to exclude
pub const DEFAULT_EXCLUDE: &str = ".venv";

/// Configuration for one run. Built fresh per invocation, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineConfig {
    /// Directory tree to scan
    pub root: PathBuf,

    /// File the combined text is written to
    pub output: PathBuf,

    /// File name suffixes to include (e.g. ".py")
    pub formats: BTreeSet<String>,

    /// Directory names to skip wherever they appear in a path
    pub exclude_dirs: BTreeSet<String>,
}

impl CombineConfig {
    /// Create a config with the default output, formats and excludes
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            formats: BTreeSet::from([DEFAULT_FORMAT.to_string()]),
            exclude_dirs: BTreeSet::from([DEFAULT_EXCLUDE.to_string()]),
        }
    }

    /// Set the output file
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Replace the set of suffixes
    pub fn with_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the set of excluded directory names
    pub fn with_exclude_dirs<I, S>(mut self, exclude_dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs = exclude_dirs.into_iter().map(Into::into).collect();
        self
    }
}

/// A matched file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the root, using '/' as separator
    pub relative_path: String,

    /// Absolute path used to read the file
    pub absolute_path: PathBuf,
}

impl FileEntry {
    pub fn new(relative_path: impl Into<String>, absolute_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            absolute_path: absolute_path.into(),
        }
    }

    /// Case-insensitive ordering on the relative path, falling back to the
    /// exact string so the order is total.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        self.relative_path
            .to_lowercase()
            .cmp(&other.relative_path.to_lowercase())
            .then_with(|| self.relative_path.cmp(&other.relative_path))
    }
}

/// Sort entries into write order
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(FileEntry::sort_cmp);
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombineSummary {
    /// Output file as given on the command line
    pub output: String,

    /// Relative paths in the order they were written
    pub files: Vec<String>,

    /// Number of files replaced by an error placeholder
    #[serde(default)]
    pub read_errors: usize,
}

impl CombineSummary {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Failures that abort a run
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("Directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("No files matching {formats} found in '{}' (excluding {excludes})", .root.display())]
    NoMatchingFiles {
        root: PathBuf,
        formats: String,
        excludes: String,
    },

    #[error("Cannot write output file '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CombineError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CombineError::DirectoryNotFound(_) | CombineError::NotADirectory(_) => 3,
            CombineError::NoMatchingFiles { .. } => 4,
            CombineError::OutputWrite { .. } => 5,
        }
    }

    /// Build a `NoMatchingFiles` error from the config that produced it
    pub fn no_matching_files(config: &CombineConfig) -> Self {
        CombineError::NoMatchingFiles {
            root: config.root.clone(),
            formats: join_set(&config.formats),
            excludes: join_set(&config.exclude_dirs),
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombineError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

fn join_set(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        return "nothing".to_string();
    }
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}
