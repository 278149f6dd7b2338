//! Core types for style violations.

use serde::Serialize;

/// A style violation found during analysis.
///
/// Violations carry no location of their own: the line they belong to is the
/// key they are recorded under in the [`ViolationStore`](crate::ViolationStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Violation {
    /// Rule code (e.g., "S001").
    pub code: String,
    /// Rule name (e.g., "line-length").
    pub rule: String,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

/// A violation keyed to the 1-based line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Walk position of the item that produced the finding.
    ///
    /// Findings of all structural rules are recorded in `step` order.
    pub step: usize,
    /// Line number (1-indexed).
    pub line: usize,
    /// The violation itself.
    pub violation: Violation,
}

impl Finding {
    /// Creates a new finding at step 0.
    #[must_use]
    pub fn new(line: usize, violation: Violation) -> Self {
        Self {
            step: 0,
            line,
            violation,
        }
    }

    /// Sets the walk position of the finding.
    #[must_use]
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }
}
