//! Path normalization utilities
//!
//! Ensures all paths are normalized to use '/' as separator and are relative to root.

use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Check whether a file name ends with any of the given suffixes
pub fn matches_format(file_name: &str, formats: &BTreeSet<String>) -> bool {
    formats
        .iter()
        .any(|suffix| !suffix.is_empty() && file_name.ends_with(suffix.as_str()))
}

/// Check whether any segment of a relative path is in the exclude set
pub fn has_excluded_segment(relative: &Path, exclude_dirs: &BTreeSet<String>) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => exclude_dirs.contains(name.to_string_lossy().as_ref()),
        _ => false,
    })
}
