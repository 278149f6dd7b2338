//! # style-lint-rules
//!
//! Built-in style rules for style-lint.
//!
//! The rule set is fixed. Line rules run in the order below on every line;
//! structural rules run once per file after the line pass, and their
//! findings are recorded in the order the parser walked the items they
//! belong to.
//!
//! ## Line Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | S001 | `line-length` | Lines longer than 79 characters |
//! | S002 | `indentation` | Indentation that is not a multiple of four |
//! | S003 | `trailing-semicolon` | Statements ending in `;` |
//! | S004 | `inline-comment-spacing` | Fewer than two spaces before an inline comment |
//! | S005 | `todo-comment` | `TODO` in a comment |
//! | S006 | `blank-lines` | More than two blank lines before a line |
//! | S007 | `declaration-spacing` | Several spaces after `class` / `def` |
//! | S008 | `class-naming` | Class names not in `CamelCase` |
//! | S009 | `function-naming` | Function names not in `snake_case` |
//!
//! ## Structural Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | S012 | `mutable-default-argument` | List, dict or set literal as a default value |
//! | S010 | `argument-naming` | Argument names not in `snake_case` |
//! | S011 | `variable-naming` | Variable names not in `snake_case` |
//!
//! ## Usage
//!
//! ```ignore
//! use style_lint_core::Analyzer;
//! use style_lint_rules::{line_rules, structural_rules};
//!
//! let analyzer = Analyzer::builder(parser)
//!     .line_rules(line_rules())
//!     .structural_rules(structural_rules())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod argument_naming;
mod blank_lines;
mod class_naming;
mod declaration_spacing;
mod function_naming;
mod indentation;
mod inline_comment_spacing;
mod line_length;
mod mutable_default;
mod rule_set;
mod todo_comment;
mod trailing_semicolon;
mod variable_naming;

pub use argument_naming::ArgumentNaming;
pub use blank_lines::BlankLines;
pub use class_naming::ClassNaming;
pub use declaration_spacing::DeclarationSpacing;
pub use function_naming::FunctionNaming;
pub use indentation::Indentation;
pub use inline_comment_spacing::InlineCommentSpacing;
pub use line_length::LineLength;
pub use mutable_default::MutableDefaultArgument;
pub use rule_set::{catalog, line_rules, structural_rules, RuleInfo};
pub use todo_comment::TodoComment;
pub use trailing_semicolon::TrailingSemicolon;
pub use variable_naming::VariableNaming;

/// Re-export core types for convenience.
pub use style_lint_core::{LineRule, StructuralRule, Violation};

#[cfg(test)]
pub(crate) mod test_support {
    use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};
    use std::path::Path;

    /// Runs a line rule over a single line with fresh state.
    pub fn check_line(rule: &dyn LineRule, text: &str) -> Option<Violation> {
        let ctx = LineContext::new(Path::new("test.py"), 1, text);
        rule.check(&ctx, &mut BlankRunState::new())
    }

    /// Runs a line rule over every line of `source`, returning the 1-based
    /// lines it fired on.
    pub fn fired_lines(rule: &dyn LineRule, source: &str) -> Vec<usize> {
        let mut state = BlankRunState::new();
        source
            .split_inclusive('\n')
            .enumerate()
            .filter_map(|(i, text)| {
                let ctx = LineContext::new(Path::new("test.py"), i + 1, text);
                rule.check(&ctx, &mut state).map(|_| i + 1)
            })
            .collect()
    }
}
