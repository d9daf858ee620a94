//! Error handling for fetchfmt.
//! Rendering itself never fails; these errors come from loading
//! configuration and arguments.

use std::io;
use thiserror::Error;

/// Errors that can occur while preparing a render.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system or stdin operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// An argument entry whose value does not match its declared type
    #[error("Argument error: {0}.")]
    ArgumentError(String),

    /// Neither a format string nor configured modules were supplied
    #[error("Nothing to render: pass a format string or a configuration with modules.")]
    FormatMissing,
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
