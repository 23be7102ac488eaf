//! Renderer module
//!
//! Writes the banner block that precedes each file in the combined output,
//! and renders the end-of-run summary as text or json.

use colored::Colorize;
use std::io::Write;

use crate::core::model::CombineSummary;

/// Width of the banner line
pub const BANNER_WIDTH: usize = 40;

/// Banner character
pub const BANNER_CHAR: char = '=';

/// The separator line written above and below each file header
pub fn banner() -> String {
    BANNER_CHAR.to_string().repeat(BANNER_WIDTH)
}

/// Write the header block for one file
pub fn write_file_header<W: Write>(writer: &mut W, relative_path: &str) -> std::io::Result<()> {
    let banner = banner();
    write!(writer, "\n{banner}\n# File: {relative_path}\n{banner}\n\n")
}

/// Write a file's content followed by a newline
pub fn write_file_body<W: Write>(writer: &mut W, content: &str) -> std::io::Result<()> {
    writer.write_all(content.as_bytes())?;
    writer.write_all(b"\n")
}

/// Write the placeholder used when a file cannot be read
pub fn write_read_error<W: Write>(writer: &mut W, message: &str) -> std::io::Result<()> {
    writeln!(writer, "# Error reading file: {message}")
}

/// Summary format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            _ => Err(format!("Unknown summary format: {}", s)),
        }
    }
}

/// Renderer for run summaries
pub struct Renderer {
    format: SummaryFormat,
}

impl Renderer {
    pub fn new(format: SummaryFormat) -> Self {
        Self { format }
    }

    /// Render a summary to a string
    pub fn render(&self, summary: &CombineSummary) -> String {
        match self.format {
            SummaryFormat::Text => self.render_text(summary),
            SummaryFormat::Json => self.render_json(summary),
        }
    }

    fn render_text(&self, summary: &CombineSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {} files into '{}'\n",
            "Successfully combined".green().bold(),
            summary.len(),
            summary.output
        ));
        if summary.read_errors > 0 {
            output.push_str(&format!(
                "{}\n",
                format!("{} file(s) could not be read", summary.read_errors).yellow()
            ));
        }

        output.push_str("\nProcessed files:\n");
        for path in &summary.files {
            output.push_str(&format!("- {}\n", path));
        }

        output
    }

    fn render_json(&self, summary: &CombineSummary) -> String {
        serde_json::to_string(summary).unwrap_or_else(|_| "{}".to_string())
    }
}
