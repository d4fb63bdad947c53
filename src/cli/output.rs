//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::fmt::Display;

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}

/// Success status (green checkmark)
pub fn success(msg: &(impl Display + ?Sized)) -> String {
    format!("{} {}", "✓".green(), msg)
}

/// Completed action (green label)
pub fn action(label: &str, msg: &(impl Display + ?Sized)) -> String {
    format!("{}: {}", label.green(), msg)
}

/// Upgraded request (yellow arrow, indented)
pub fn upgrade(msg: &(impl Display + ?Sized)) -> String {
    format!("  {} {}", "↑".yellow(), msg)
}

/// Indented detail (no color)
pub fn detail(msg: &(impl Display + ?Sized)) -> String {
    format!("  {}", msg)
}
