//! # style-lint-core
//!
//! Core framework for Python style linting.
//!
//! This crate provides the foundational traits and types for the style
//! checker. It includes:
//!
//! - [`LineRule`] trait for checks over one physical line
//! - [`StructuralRule`] trait for checks over a parsed [`StructuralView`]
//! - [`SourceParser`] trait, the seam for the analyzed language's parser
//! - [`Analyzer`] for orchestrating the two-pass scan
//! - [`ViolationStore`] for insertion-ordered aggregation of [`Violation`]s
//!
//! ## Example
//!
//! ```ignore
//! use style_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder(PythonParser::new())
//!     .line_rules(line_rules())
//!     .structural_rules(structural_rules())
//!     .build();
//!
//! let run = analyzer.scan_paths(["test_1.py", "test_2.py"]);
//! for entry in run.store.entries() {
//!     println!("{entry}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod store;
mod types;
mod view;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, ScanRun};
pub use config::{AnalyzerConfig, Config, ConfigError};
pub use context::{BlankRunState, LineContext};
pub use rule::{LineRule, LineRuleBox, StructuralRule, StructuralRuleBox};
pub use store::{FileReport, LineRecord, ReportEntry, ViolationStore};
pub use types::{Finding, Violation};
pub use view::{
    Binding, DefaultKind, FunctionDef, Parameter, ParseError, SourceParser, StructuralView,
};
