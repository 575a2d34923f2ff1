//! Terminal output helpers
//!
//! Artifacts go to stdout so they can be piped. Status lines go to stderr
//! and are dropped in quiet mode.

use console::style;

pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✓").green(), message);
        }
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Title above a block of artifact text.
    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    /// Named artifact block, e.g. a file name above its contents.
    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold().cyan());
        println!("{}", style("─".repeat(40)).dim());
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
