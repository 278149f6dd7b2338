//! Rule to forbid statements terminated by a semicolon.
//!
//! Only the code before the first comment marker is inspected, so
//! `x = 1  # a;` passes. The check is textual: a `;` closing a string
//! literal at the end of a line is still reported.

use style_lint_core::utils::split_comment;
use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};

/// Rule code for trailing-semicolon.
pub const CODE: &str = "S003";

/// Rule name for trailing-semicolon.
pub const NAME: &str = "trailing-semicolon";

/// Flags lines whose code part ends with `;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingSemicolon;

impl TrailingSemicolon {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for TrailingSemicolon {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Statements ending in a semicolon"
    }

    fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
        let (code, _) = split_comment(ctx.text);
        code.trim_end()
            .ends_with(';')
            .then(|| Violation::new(CODE, NAME, "Unnecessary semicolon"))
    }
}
