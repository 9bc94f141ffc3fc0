//! Styled messages for the terminal.
//!
//! Everything goes to stderr; stdout carries only the published version.

use console::style;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Format the summary line shown after a successful resolution.
pub fn format_resolution(property: &str, version: &str, source: &str) -> String {
    format!(
        "Setting property '{}' to: {} ({})",
        property,
        style(version).bold(),
        source
    )
}
