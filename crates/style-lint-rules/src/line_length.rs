//! Rule to limit line length.
//!
//! # Rationale
//!
//! Long lines are hard to read side by side and in diffs. Length is the raw
//! character count of the line without its terminator, not display width.

use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};

/// Rule code for line-length.
pub const CODE: &str = "S001";

/// Rule name for line-length.
pub const NAME: &str = "line-length";

/// Longest accepted line, in characters.
pub const MAX_LINE_LENGTH: usize = 79;

/// Flags lines longer than [`MAX_LINE_LENGTH`] characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineLength;

impl LineLength {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for LineLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Lines longer than 79 characters"
    }

    fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
        (ctx.visible().chars().count() > MAX_LINE_LENGTH)
            .then(|| Violation::new(CODE, NAME, "Too long"))
    }
}
