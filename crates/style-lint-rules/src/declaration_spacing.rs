//! Rule to forbid extra spaces between `class` / `def` and the name.

use regex::Regex;
use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};

/// Rule code for declaration-spacing.
pub const CODE: &str = "S007";

/// Rule name for declaration-spacing.
pub const NAME: &str = "declaration-spacing";

/// Flags `class` or `def` followed by two or more spaces.
#[derive(Debug, Clone)]
pub struct DeclarationSpacing {
    pattern: Regex,
}

impl Default for DeclarationSpacing {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationSpacing {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^\s*(?:async\s+)?(class|def)\s{2,}\w").expect("Invalid regex"),
        }
    }
}

impl LineRule for DeclarationSpacing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Several spaces after 'class' or 'def'"
    }

    fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
        let caps = self.pattern.captures(ctx.text)?;
        let keyword = caps.get(1).map_or("def", |m| m.as_str());
        Some(Violation::new(
            CODE,
            NAME,
            format!("Too many spaces after '{keyword}'"),
        ))
    }
}
