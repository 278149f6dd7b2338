//! Rule to require indentation in multiples of four.
//!
//! Blank and whitespace-only lines are exempt, whatever their width.

use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};

/// Rule code for indentation.
pub const CODE: &str = "S002";

/// Rule name for indentation.
pub const NAME: &str = "indentation";

const INDENT_WIDTH: usize = 4;

/// Flags non-blank lines whose leading whitespace is not a multiple of four.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indentation;

impl Indentation {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for Indentation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Indentation that is not a multiple of four"
    }

    fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
        if ctx.is_blank() || ctx.indent_width() % INDENT_WIDTH == 0 {
            return None;
        }
        Some(Violation::new(
            CODE,
            NAME,
            "Indentation is not a multiple of four",
        ))
    }
}
