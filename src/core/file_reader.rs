//! File reading for the combine step
//!
//! Files are decoded strictly as UTF-8. Anything that cannot be read as
//! text (I/O failure, invalid UTF-8) yields a failed result carrying a
//! message instead of an error, so the caller can substitute a placeholder
//! and keep going.

use std::fs;
use std::path::Path;

/// Result of reading a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReadResult {
    /// The full text content
    Text(String),

    /// The file could not be read as text
    Failed(String),
}

impl FileReadResult {
    #[cfg(test)]
    pub fn is_failed(&self) -> bool {
        matches!(self, FileReadResult::Failed(_))
    }

    /// The content, or None if the read failed
    #[cfg(test)]
    pub fn content(&self) -> Option<&str> {
        match self {
            FileReadResult::Text(content) => Some(content),
            FileReadResult::Failed(_) => None,
        }
    }
}

/// Read a whole file as UTF-8 text
pub fn read_text(path: &Path) -> FileReadResult {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => return FileReadResult::Failed(e.to_string()),
    };

    match String::from_utf8(bytes) {
        Ok(content) => FileReadResult::Text(content),
        Err(e) => FileReadResult::Failed(format!("invalid UTF-8 content: {}", e.utf8_error())),
    }
}
