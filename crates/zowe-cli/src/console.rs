//! CLI console utilities

use colored::*;

/// CLI console for formatted output.
///
/// Reports go to stdout; everything else goes to stderr so the report can be
/// piped.
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        eprintln!();
        eprintln!("{}", title.bold().underline());
        eprintln!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    /// Print a labelled value
    pub fn print_field(&self, label: &str, value: &str) {
        eprintln!("  {:<20} {}", format!("{}:", label).dimmed(), value);
    }

    /// Print the machine-readable report
    pub fn report(&self, text: &str) {
        println!("{}", text.trim_end());
    }
}
