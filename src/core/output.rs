//! Console formatting helpers for consistent CLI presentation.
//!
//! Standardized formatting for all branch-flow output: red for errors, green
//! checkmarks for success, blue for command echo and links, bright_black for
//! muted detail. Newline spacing keeps multi-step workflows readable.

use colored::*;

/// `✕ Error: <message>` in red, spaced from surrounding output
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// `✓ <message>` in green
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Plain informational message
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// `<header>:` followed by a blank line
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// `» <line>` command echo in muted blue
pub fn print_command(line: &str) {
    println!("{} {}", "»".blue(), line.bright_black());
}

/// Address on its own line so terminals make it clickable
pub fn print_link(address: &str) {
    println!("\n{} {}", "→".blue(), address.blue().underline());
}
