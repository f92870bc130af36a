//! Styled terminal output for CLI feedback.

use console::Style;

/// Coordinates user-facing terminal output.
///
/// Progress goes to stdout and honors `quiet`; warnings and errors always
/// go to stderr.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{}", Style::new().dim().apply_to(message));
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", Style::new().green().apply_to(message));
        }
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!(
            "{} {message}",
            Style::new().yellow().bold().apply_to("warning:")
        );
    }

    /// Print an error message
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", Style::new().red().bold().apply_to("error:"));
    }
}
