//! Common constants used throughout fetchfmt.

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["fetchfmt.json", "fetchfmt.yml", "fetchfmt.yaml"];

/// Restores the default terminal text style
pub const TEXT_MODIFIER_RESET: &str = "\x1b[0m";

/// Written between a module key and its rendered output
pub const DEFAULT_SEPARATOR: &str = ": ";
