//! Display capability
//!
//! User-facing progress lines. Diagnostics go through `tracing`; this is
//! what a person running the tool reads.

use console::style;

/// Sink for progress lines
pub trait Reporter: Send + Sync {
    /// Section header
    fn header(&self, text: &str);

    /// Something succeeded
    fn success(&self, text: &str);

    /// Something failed
    fn error(&self, text: &str);

    /// Blank separator line
    fn separator(&self);
}

/// Coloured output on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn header(&self, text: &str) {
        println!();
        println!(" {}", style(text).cyan().underlined());
        println!();
    }

    fn success(&self, text: &str) {
        println!("  {}  {}", style("✓").green(), text);
    }

    fn error(&self, text: &str) {
        println!("  {}  {}", style("✗").red(), text);
    }

    fn separator(&self) {
        println!();
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn header(&self, _text: &str) {}

    fn success(&self, _text: &str) {}

    fn error(&self, _text: &str) {}

    fn separator(&self) {}
}
