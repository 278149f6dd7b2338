//! Context types for rule execution.

use std::path::Path;

/// Context provided to line rules.
///
/// Carries one physical line exactly as read, trailing newline included.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Path of the file being scanned.
    pub path: &'a Path,
    /// Line number (1-indexed).
    pub number: usize,
    /// Raw line text, including its line terminator if present.
    pub text: &'a str,
}

impl<'a> LineContext<'a> {
    /// Creates a new line context.
    #[must_use]
    pub fn new(path: &'a Path, number: usize, text: &'a str) -> Self {
        Self { path, number, text }
    }

    /// The line without its terminator (`\n` or `\r\n`).
    #[must_use]
    pub fn visible(&self) -> &'a str {
        let text = self.text.strip_suffix('\n').unwrap_or(self.text);
        text.strip_suffix('\r').unwrap_or(text)
    }

    /// Whether the line is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of leading whitespace characters.
    #[must_use]
    pub fn indent_width(&self) -> usize {
        self.text.chars().take_while(|c| c.is_whitespace()).count()
    }
}

/// Number of consecutive blank lines immediately before the current line.
///
/// Scoped to one file: the analyzer creates a fresh state per file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankRunState {
    count: usize,
}

impl BlankRunState {
    /// Creates a state with no preceding blank lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current run length.
    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    /// Extends the run by one blank line.
    pub fn extend(&mut self) {
        self.count += 1;
    }

    /// Ends the run, returning its length.
    pub fn take(&mut self) -> usize {
        std::mem::take(&mut self.count)
    }
}
