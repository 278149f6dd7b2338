//! Insertion-ordered aggregation of violations.
//!
//! The store is keyed by file, then by line. Both levels keep the order in
//! which a key was *first touched*, not numeric or lexical order. Because the
//! structural pass runs after the line pass, a structural violation on a line
//! that had no line violation lands after every line already present:
//!
//! ```text
//! line pass:        3 -> [S001]   9 -> [S002]
//! structural pass:  1 -> [S012]   3 -> [S011]
//! report order:     3 -> [S001, S011]   9 -> [S002]   1 -> [S012]
//! ```
//!
//! This ordering is part of the observable output and is kept as-is.

use crate::types::Violation;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The violations recorded against one line, in append order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Line number (1-indexed).
    pub line: usize,
    /// Violations in the order they were recorded.
    pub violations: Vec<Violation>,
}

/// Violations for a single file, keyed by line in first-touched order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    lines: IndexMap<usize, LineRecord>,
}

impl FileReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation to `line`, creating the line entry on first use.
    pub fn record(&mut self, line: usize, violation: Violation) {
        self.lines
            .entry(line)
            .or_insert_with(|| LineRecord {
                line,
                violations: Vec::new(),
            })
            .violations
            .push(violation);
    }

    /// Returns the record for `line`, if any rule fired on it.
    #[must_use]
    pub fn get(&self, line: usize) -> Option<&LineRecord> {
        self.lines.get(&line)
    }

    /// Iterates line records in first-touched order.
    pub fn lines(&self) -> impl Iterator<Item = &LineRecord> + '_ {
        self.lines.values()
    }

    /// Iterates line numbers in first-touched order.
    pub fn line_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.keys().copied()
    }

    /// Total number of violations across all lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.values().map(|r| r.violations.len()).sum()
    }

    /// Returns true if no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One rendered row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// File the violation belongs to.
    pub path: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Rule code.
    pub code: String,
    /// Rule name.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: Line {}: {} {}",
            self.path.display(),
            self.line,
            self.code,
            self.message
        )
    }
}

/// Run-wide aggregation of violations, keyed by path then line.
///
/// Owned by whoever drives the scan and passed explicitly; there is no
/// shared global instance. Recorded violations are never removed or changed.
#[derive(Debug, Clone, Default)]
pub struct ViolationStore {
    files: IndexMap<PathBuf, FileReport>,
}

impl ViolationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `violation` at `store[path][line]`, creating keys on first use.
    pub fn record(&mut self, path: &Path, line: usize, violation: Violation) {
        if let Some(report) = self.files.get_mut(path) {
            report.record(line, violation);
            return;
        }
        let mut report = FileReport::new();
        report.record(line, violation);
        self.files.insert(path.to_path_buf(), report);
    }

    /// Records every violation of a staged report, preserving its order.
    ///
    /// An empty report leaves the store untouched.
    pub fn commit(&mut self, path: &Path, report: FileReport) {
        for record in report.lines.into_values() {
            for violation in record.violations {
                self.record(path, record.line, violation);
            }
        }
    }

    /// Iterates `(path, line, violation)` triples in store order.
    ///
    /// Paths come in first-touched order, lines within a path in
    /// first-touched order, and violations within a line in append order.
    /// The iterator borrows the store, so calling this again restarts it.
    pub fn all_violations(&self) -> impl Iterator<Item = (&Path, usize, &Violation)> + '_ {
        self.files.iter().flat_map(|(path, report)| {
            report.lines().flat_map(move |record| {
                record
                    .violations
                    .iter()
                    .map(move |v| (path.as_path(), record.line, v))
            })
        })
    }

    /// Returns the report for `path`, if anything was recorded for it.
    #[must_use]
    pub fn file(&self, path: &Path) -> Option<&FileReport> {
        self.files.get(path)
    }

    /// Iterates paths in first-touched order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Total number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.values().map(FileReport::len).sum()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files with at least one violation.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Flattens the store into report rows, in store order.
    #[must_use]
    pub fn entries(&self) -> Vec<ReportEntry> {
        self.all_violations()
            .map(|(path, line, v)| ReportEntry {
                path: path.to_path_buf(),
                line,
                code: v.code.clone(),
                rule: v.rule.clone(),
                message: v.message.clone(),
            })
            .collect()
    }
}
