use std::fmt::Display;

use colored::*;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let heading = format!(" {} ", text).bold().bright_white();
    let line = "=".repeat(50).bright_blue();

    println!("{}", line);
    println!("{}", heading);
    println!("{}", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

/// Print an error banner to stderr
pub fn print_error<T: Display>(message: T) {
    eprintln!("{} {}", "Error:".bright_red().bold(), message);
}
