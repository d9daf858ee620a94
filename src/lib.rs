//! fetchfmt renders typed system facts through user supplied format strings.
//! It provides the placeholder format engine together with the layout
//! configuration and command-line surface that feed it.

/// Owned, typed argument values loaded from JSON or YAML
pub mod args;

/// Command-line interface module for the fetchfmt application
pub mod cli;

/// Layout configuration
/// Supports JSON and YAML formats (fetchfmt.json, fetchfmt.yml, fetchfmt.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the fetchfmt application
pub mod error;

/// The placeholder format engine
pub mod format;

/// Format help generation
pub mod help;

/// Logger setup
pub mod logger;
