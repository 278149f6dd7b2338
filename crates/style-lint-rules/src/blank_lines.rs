//! Rule to limit runs of blank lines.
//!
//! # State
//!
//! The only stateful line rule. Every blank line extends the run held in
//! [`BlankRunState`]; the first non-blank line after it ends the run and the
//! rule fires once if the run was longer than [`MAX_BLANK_LINES`].

use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};

/// Rule code for blank-lines.
pub const CODE: &str = "S006";

/// Rule name for blank-lines.
pub const NAME: &str = "blank-lines";

/// Longest accepted run of blank lines.
pub const MAX_BLANK_LINES: usize = 2;

/// Flags the first line after more than two consecutive blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLines;

impl BlankLines {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for BlankLines {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "More than two blank lines before a line"
    }

    fn check(&self, ctx: &LineContext<'_>, state: &mut BlankRunState) -> Option<Violation> {
        if ctx.is_blank() {
            state.extend();
            return None;
        }
        (state.take() > MAX_BLANK_LINES).then(|| {
            Violation::new(
                CODE,
                NAME,
                "More than two blank lines used before this line",
            )
        })
    }
}
