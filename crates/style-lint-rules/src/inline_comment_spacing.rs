//! Rule to require two spaces before an inline comment.
//!
//! A comment starting at column 0 is a comment line, not an inline comment,
//! and is exempt. An indented comment line passes as long as its indentation
//! is at least two spaces.

use style_lint_core::utils::split_comment;
use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};

/// Rule code for inline-comment-spacing.
pub const CODE: &str = "S004";

/// Rule name for inline-comment-spacing.
pub const NAME: &str = "inline-comment-spacing";

/// Flags inline comments preceded by fewer than two spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineCommentSpacing;

impl InlineCommentSpacing {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for InlineCommentSpacing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Fewer than two spaces before an inline comment"
    }

    fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
        let (code, comment) = split_comment(ctx.text);
        if comment.is_none() || code.is_empty() || code.ends_with("  ") {
            return None;
        }
        Some(Violation::new(
            CODE,
            NAME,
            "At least two spaces required before inline comments",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::check_line;

    #[test]
    fn fires_on_tight_comment() {
        assert!(check_line(&InlineCommentSpacing, "x = 1 # one space\n").is_some());
        assert!(check_line(&InlineCommentSpacing, "x = 1# none\n").is_some());
    }

    #[test]
    fn two_spaces_pass() {
        assert!(check_line(&InlineCommentSpacing, "x = 1  # fine\n").is_none());
        assert!(check_line(&InlineCommentSpacing, "x = 1    # fine\n").is_none());
    }

    #[test]
    fn comment_lines_exempt() {
        assert!(check_line(&InlineCommentSpacing, "# header\n").is_none());
        assert!(check_line(&InlineCommentSpacing, "    # indented\n").is_none());
        assert!(check_line(&InlineCommentSpacing, "x = 1\n").is_none());
    }
}
