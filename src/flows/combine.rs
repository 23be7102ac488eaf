//! Combine flow - Concatenate scanned files into one output file
//!
//! A two-phase pipeline: scan the root, then write every entry behind a
//! banner header. Unreadable files are replaced by an error line and the
//! run continues; anything that prevents writing the output aborts it.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::backends::scan::scan_files;
use crate::core::file_reader::{read_text, FileReadResult};
use crate::core::model::{CombineConfig, CombineError, CombineSummary, FileEntry};
use crate::core::paths::normalize_path;
use crate::core::render::{
    write_file_body, write_file_header, write_read_error, Renderer, SummaryFormat,
};

/// Write the entries to `output` in order, creating missing parent directories.
pub fn combine(entries: &[FileEntry], output: &Path) -> Result<CombineSummary, CombineError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(dir = %parent.display(), "creating output directory");
            fs::create_dir_all(parent).map_err(|e| CombineError::output_write(output, e))?;
        }
    }

    let file = File::create(output).map_err(|e| CombineError::output_write(output, e))?;
    let mut writer = BufWriter::new(file);

    let read_errors = write_entries(&mut writer, entries)
        .and_then(|count| writer.flush().map(|_| count))
        .map_err(|e| CombineError::output_write(output, e))?;

    info!(
        files = entries.len(),
        read_errors,
        output = %output.display(),
        "combined"
    );

    Ok(CombineSummary {
        output: normalize_path(output),
        files: entries.iter().map(|e| e.relative_path.clone()).collect(),
        read_errors,
    })
}

/// Write each entry's block, returning how many files could not be read
pub fn write_entries<W: Write>(writer: &mut W, entries: &[FileEntry]) -> std::io::Result<usize> {
    let mut read_errors = 0;

    for entry in entries {
        write_file_header(writer, &entry.relative_path)?;

        match read_text(&entry.absolute_path) {
            FileReadResult::Text(content) => write_file_body(writer, &content)?,
            FileReadResult::Failed(message) => {
                warn!(path = %entry.relative_path, "cannot read file: {}", message);
                read_errors += 1;
                write_read_error(writer, &message)?;
            }
        }
    }

    Ok(read_errors)
}

/// Run the whole pipeline: scan, combine, then print the summary
pub fn run_combine(
    config: &CombineConfig,
    format: SummaryFormat,
    quiet: bool,
) -> Result<CombineSummary, CombineError> {
    let entries = scan_files(config)?;
    let summary = combine(&entries, &config.output)?;

    if !quiet {
        let renderer = Renderer::new(format);
        println!("{}", renderer.render(&summary));
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn block(relative: &str, body: &str) -> String {
        let banner = "=".repeat(40);
        format!("\n{banner}\n# File: {relative}\n{banner}\n\n{body}\n")
    }

    #[test]
    fn test_combine_writes_blocks_in_order() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("project");
        write_file(&root.join("b.py"), b"b = 2");
        write_file(&root.join("a/x.py"), b"x = 1\n");

        let output = temp.path().join("out.txt");
        let config = CombineConfig::new(&root).with_output(&output);
        let summary = run_combine(&config, SummaryFormat::Json, true).unwrap();

        assert_eq!(summary.files, vec!["a/x.py", "b.py"]);
        assert_eq!(summary.read_errors, 0);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, block("a/x.py", "x = 1\n") + &block("b.py", "b = 2"));
    }

    #[test]
    fn test_combine_recovers_from_invalid_utf8() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("project");
        write_file(&root.join("good.py"), b"ok = True");
        write_file(&root.join("bad.py"), &[0x23, 0xFF, 0x0A]);

        let output = temp.path().join("out.txt");
        let config = CombineConfig::new(&root).with_output(&output);
        let summary = run_combine(&config, SummaryFormat::Text, true).unwrap();

        assert_eq!(summary.files, vec!["bad.py", "good.py"]);
        assert_eq!(summary.read_errors, 1);

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("# File: bad.py"));
        assert!(written.contains("# Error reading file: invalid UTF-8 content"));
        assert!(written.ends_with(&block("good.py", "ok = True")));
    }

    #[test]
    fn test_combine_records_vanished_file() {
        let temp = tempdir().unwrap();
        let entries = vec![FileEntry::new("gone.py", temp.path().join("gone.py"))];

        let mut buf = Vec::new();
        let read_errors = write_entries(&mut buf, &entries).unwrap();
        assert_eq!(read_errors, 1);

        let written = String::from_utf8(buf).unwrap();
        assert!(written.contains("# File: gone.py"));
        assert!(written.contains("# Error reading file: "));
    }

    #[test]
    fn test_combine_creates_parent_directories() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("project");
        write_file(&root.join("main.py"), b"pass");

        let output = temp.path().join("nested/deeper/out.txt");
        let config = CombineConfig::new(&root).with_output(&output);
        run_combine(&config, SummaryFormat::Text, true).unwrap();

        assert!(output.is_file());
    }

    #[test]
    fn test_combine_is_idempotent() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("project");
        write_file(&root.join("one.py"), b"1");
        write_file(&root.join("Two.py"), b"2");
        write_file(&root.join("sub/three.py"), b"3");

        let output = temp.path().join("out.txt");
        let config = CombineConfig::new(&root).with_output(&output);

        run_combine(&config, SummaryFormat::Text, true).unwrap();
        let first = fs::read(&output).unwrap();
        run_combine(&config, SummaryFormat::Text, true).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_output_on_missing_root() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out.txt");
        let config = CombineConfig::new(temp.path().join("missing")).with_output(&output);

        let err = run_combine(&config, SummaryFormat::Text, true).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(!output.exists());
    }

    #[test]
    fn test_no_output_when_nothing_matches() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("project");
        write_file(&root.join("readme.md"), b"# hi");

        let output = temp.path().join("out.txt");
        let config = CombineConfig::new(&root).with_output(&output);

        let err = run_combine(&config, SummaryFormat::Text, true).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(!output.exists());
    }

    #[test]
    fn test_output_write_failure() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("project");
        write_file(&root.join("main.py"), b"pass");

        // A regular file where the output's parent directory should be
        let blocker = temp.path().join("blocker");
        write_file(&blocker, b"");
        let output = blocker.join("out.txt");

        let entries = scan_files(&CombineConfig::new(&root)).unwrap();
        let err = combine(&entries, &output).unwrap_err();
        assert!(matches!(err, CombineError::OutputWrite { .. }));
        assert_eq!(err.exit_code(), 5);
    }
}
