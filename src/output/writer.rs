//! Message output abstraction
//!
//! Status and diagnostic messages go through an [`OutputWriter`] so commands
//! do not care whether they run in a terminal or under test. Results
//! themselves (item lists, JSON, CSV) are written to the command's output
//! stream, not through this trait.

use colored::Colorize;
use std::sync::Mutex;

/// Trait for status and diagnostic messages
///
/// # Examples
///
/// ```no_run
/// use mentorq::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.info("Loaded 6 videos");
/// output.success("Saved query 'beginner'");
/// output.error("Unknown sort key 'cheapest'");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - colored messages on stdout/stderr
///
/// In quiet mode only errors and warnings are printed.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "warning:".yellow(), message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Writer that records messages in memory
///
/// Used by embedding front ends that render messages themselves, and by tests.
#[derive(Default)]
pub struct MemoryWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl MemoryWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Whether any message of the given level was recorded
    #[must_use]
    pub fn has(&self, level: MessageLevel) -> bool {
        self.messages().iter().any(|(l, _)| *l == level)
    }

    fn add(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for MemoryWriter {
    fn write(&self, message: &str) {
        self.add(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add(MessageLevel::Info, message);
    }
}
