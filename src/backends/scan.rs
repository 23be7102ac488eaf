//! File scanning backend
//!
//! Uses walkdir to enumerate files under the root whose names end in one of
//! the configured suffixes, pruning excluded directories as it goes.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::core::model::{sort_entries, CombineConfig, CombineError, FileEntry};
use crate::core::paths::{has_excluded_segment, make_relative, matches_format};

/// Check the root and return its canonical form
pub fn resolve_root(root: &Path) -> Result<PathBuf, CombineError> {
    if !root.exists() {
        return Err(CombineError::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CombineError::NotADirectory(root.to_path_buf()));
    }
    root.canonicalize()
        .map_err(|_| CombineError::DirectoryNotFound(root.to_path_buf()))
}

/// Scan the root for matching files, sorted into write order.
///
/// Each path is visited once by the walk, so a file whose name matches
/// several suffixes still yields a single entry. An empty result is
/// reported as `NoMatchingFiles`.
pub fn scan_files(config: &CombineConfig) -> Result<Vec<FileEntry>, CombineError> {
    let root = resolve_root(&config.root)?;
    let output = config.output.canonicalize().ok();

    debug!(
        root = %root.display(),
        formats = ?config.formats,
        exclude = ?config.exclude_dirs,
        "scanning"
    );

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| match entry.path().strip_prefix(&root) {
            Ok(relative) => !has_excluded_segment(relative, &config.exclude_dirs),
            Err(_) => true,
        });

    let mut entries = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();

        // Follows symlinks to regular files; symlinked dirs are never descended
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !matches_format(&file_name, &config.formats) {
            continue;
        }

        if output.as_deref() == Some(path) {
            debug!(path = %path.display(), "skipping the output file");
            continue;
        }

        let relative = match make_relative(path, &root) {
            Some(r) => r,
            None => continue,
        };

        trace!(path = %relative, "matched");
        entries.push(FileEntry::new(relative, path));
    }

    if entries.is_empty() {
        return Err(CombineError::no_matching_files(config));
    }

    sort_entries(&mut entries);
    debug!(count = entries.len(), "scan complete");
    Ok(entries)
}
