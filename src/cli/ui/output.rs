use console::style;
use std::fmt::Display;

/// Styled status lines for command output
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress everything except errors
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    pub fn section(&self, message: &str) {
        if !self.quiet {
            println!("\n{}", style(message).bold());
            println!("{}", "─".repeat(40));
        }
    }

    /// Indented `key: value` line under a section
    pub fn field(&self, key: &str, value: impl Display) {
        if !self.quiet {
            println!("  {:<18} {}", style(format!("{}:", key)).dim(), value);
        }
    }

    /// Print a pre-rendered block as is
    pub fn block(&self, text: &str) {
        if !self.quiet {
            print!("{}", text);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
