//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::model::{CombineConfig, DEFAULT_EXCLUDE, DEFAULT_FORMAT, DEFAULT_OUTPUT};
use crate::core::render::SummaryFormat;

/// combiner - concatenate the source files under a directory into one text file.
#[derive(Parser, Debug)]
#[command(name = "combiner")]
#[command(
    author,
    version,
    about,
    long_about = r##"combiner walks DIRECTORY, collects every file whose name ends in one of
the given suffixes, and writes them into a single text file. Each file is
preceded by a banner with its path relative to DIRECTORY:

    ========================================
    # File: pkg/module.py
    ========================================

Files are written in case-insensitive path order, so repeated runs produce
identical output. Files that cannot be read as UTF-8 are replaced by an
"# Error reading file: ..." line.

Exit codes:
    0  success
    2  invalid arguments
    3  DIRECTORY does not exist or is not a directory
    4  no matching files
    5  the output file could not be written

Examples:
    combiner src
    combiner . -f .rs .toml -e target .git -o out/context.txt
    combiner app --summary-format json
"##
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Output file path.
    #[arg(
        short,
        long,
        env = "COMBINER_OUTPUT",
        default_value = DEFAULT_OUTPUT,
        value_name = "FILE",
        long_help = "Path of the combined output file. It is created or overwritten, and\n\
missing parent directories are created."
    )]
    pub output: PathBuf,

    /// File suffixes to include, space-separated.
    #[arg(
        short,
        long,
        num_args = 0..,
        default_value = DEFAULT_FORMAT,
        value_name = "SUFFIX",
        long_help = "File name suffixes to include, space-separated.\n\n\
Matching is a literal, case-sensitive suffix test on the file name.\n\
Passing -f with no suffixes matches nothing.\n\
Example: -f .py .pyi"
    )]
    pub formats: Vec<String>,

    /// Directory names to exclude, space-separated.
    #[arg(
        short,
        long,
        num_args = 0..,
        default_value = DEFAULT_EXCLUDE,
        value_name = "DIR",
        long_help = "Directory names to exclude, space-separated.\n\n\
A file is skipped if any segment of its path below DIRECTORY equals one of\n\
these names. Segments above DIRECTORY are not checked, so a DIRECTORY inside\n\
e.g. ~/.venv/ is still scanned. Passing -e with no names disables exclusion.\n\
Example: -e .venv __pycache__ build"
    )]
    pub exclude: Vec<String>,

    /// Summary format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "json"],
        value_name = "FORMAT",
        long_help = "How the end-of-run summary is printed to stdout.\n\n\
Supported values:\n\
- text (default): count and list of combined files\n\
- json: a single JSON object with output, files and read_errors"
    )]
    pub summary_format: String,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no summary, errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the immutable run configuration
    pub fn to_config(&self) -> CombineConfig {
        CombineConfig::new(&self.directory)
            .with_output(&self.output)
            .with_formats(self.formats.iter().cloned())
            .with_exclude_dirs(self.exclude.iter().cloned())
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: SummaryFormat = cli.summary_format.parse().unwrap_or_default();
    let config = cli.to_config();

    crate::flows::combine::run_combine(&config, format, cli.quiet)?;
    Ok(())
}
