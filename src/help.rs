//! Format help: which placeholders a module understands.

use std::fmt::Write;

/// Describes the placeholders of a module.
///
/// ```text
/// CPU format:
///   default: {1} ({2})
///   {1}: Name
///   {2}: Thread count
/// ```
pub fn format_help(name: &str, default_format: &str, descriptions: &[String]) -> String {
    let mut help = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(help, "{} format:", name);
    let _ = writeln!(help, "  default: {}", default_format);
    for (index, description) in descriptions.iter().enumerate() {
        let _ = writeln!(help, "  {{{}}}: {}", index + 1, description);
    }
    help
}
