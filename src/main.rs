//! combiner - Concatenate the files under a directory into one text file
//!
//! combiner provides:
//! - Recursive scanning filtered by file suffix and excluded directory names
//! - Deterministic, case-insensitive path ordering
//! - Banner-separated output suitable for humans and LLM prompts
//! - Distinct exit codes for each abort condition

use clap::Parser;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod flows;
mod logging;

use crate::core::model::CombineError;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    logging::init(cli.quiet, cli.verbose, cli.no_color);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            let code = err
                .downcast_ref::<CombineError>()
                .map(CombineError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}
