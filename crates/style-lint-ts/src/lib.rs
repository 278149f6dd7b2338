//! # style-lint-ts
//!
//! Tree-sitter based structural parsing for style-lint.
//!
//! Provides [`PythonParser`], the [`SourceParser`](style_lint_core::SourceParser)
//! used by the structural rules. It extracts function definitions (with
//! parameter names and default-value kinds) and every name-binding
//! occurrence from Python source, and rejects source with syntax errors.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod python;

pub use python::PythonParser;
