//! Terminal output utilities
//!
//! The driver's own reporting goes to stdout; stderr is left to the
//! child processes.

use console::style;

/// Print an error message
pub fn print_error(message: &str) {
    println!("{}: {}", style("error").red().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}: {}", style("info").blue().bold(), message);
}
