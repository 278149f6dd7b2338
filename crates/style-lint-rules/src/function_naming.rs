//! Rule to require `snake_case` function names.

use regex::Regex;
use style_lint_core::utils::is_snake_case;
use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};

/// Rule code for function-naming.
pub const CODE: &str = "S009";

/// Rule name for function-naming.
pub const NAME: &str = "function-naming";

/// Flags function declarations whose name contains an uppercase letter.
#[derive(Debug, Clone)]
pub struct FunctionNaming {
    pattern: Regex,
}

impl Default for FunctionNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^\s*(?:async\s+)?def\s+(\w+)").expect("Invalid regex"),
        }
    }
}

impl LineRule for FunctionNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Function names not in snake_case"
    }

    fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
        let name = self.pattern.captures(ctx.text)?.get(1)?.as_str();
        if is_snake_case(name) {
            return None;
        }
        Some(Violation::new(
            CODE,
            NAME,
            format!("Function name '{name}' should use snake_case"),
        ))
    }
}
