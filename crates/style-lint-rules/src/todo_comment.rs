//! Rule to flag `TODO` markers left in comments.

use style_lint_core::utils::split_comment;
use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};

/// Rule code for todo-comment.
pub const CODE: &str = "S005";

/// Rule name for todo-comment.
pub const NAME: &str = "todo-comment";

/// Flags comments containing "todo" in any case.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoComment;

impl TodoComment {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for TodoComment {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "TODO found in a comment"
    }

    fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
        let (_, comment) = split_comment(ctx.text);
        comment
            .filter(|c| c.to_lowercase().contains("todo"))
            .map(|_| Violation::new(CODE, NAME, "TODO found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::check_line;

    #[test]
    fn any_case_in_comment() {
        assert!(check_line(&TodoComment, "# TODO: fix\n").is_some());
        assert!(check_line(&TodoComment, "x = 1  # todo\n").is_some());
        assert!(check_line(&TodoComment, "x = 1  # ToDo later\n").is_some());
    }

    #[test]
    fn code_part_ignored() {
        assert!(check_line(&TodoComment, "todo = []\n").is_none());
        assert!(check_line(&TodoComment, "print('TODO')\n").is_none());
        assert!(check_line(&TodoComment, "todo_list.append(1)  # add item\n").is_none());
    }
}
