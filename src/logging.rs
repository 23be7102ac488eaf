//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout only carries the run summary.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when RUST_LOG is not set
pub fn default_level(quiet: bool, verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Install the global subscriber. RUST_LOG takes precedence over the flags.
pub fn init(quiet: bool, verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(quiet, verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!no_color && std::io::stderr().is_terminal())
        .without_time()
        .try_init();
}
