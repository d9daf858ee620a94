//! Command-line interface implementation for fetchfmt.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for fetchfmt.
#[derive(Parser, Debug)]
#[command(author, version, about = "fetchfmt: render system facts through placeholder format strings", long_about = None)]
pub struct Args {
    /// Format string to render, e.g. "{1} ({2})". Without it the configured modules are rendered
    #[arg(value_name = "FORMAT")]
    pub format: Option<String>,

    /// Text arguments referenced by the format string as {1}, {2}, …
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Layout file, or a directory containing fetchfmt.json, fetchfmt.yml or fetchfmt.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read a JSON or YAML list of typed arguments from stdin.
    /// They are appended after the text ARGS. Requires FORMAT.
    #[arg(short, long, requires = "format")]
    pub stdin: bool,

    /// Print the placeholders understood by each configured module
    #[arg(long)]
    pub format_help: bool,

    /// Do not print a trailing newline
    #[arg(short, long)]
    pub no_newline: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
