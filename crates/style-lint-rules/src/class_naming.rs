//! Rule to require `CamelCase` class names.

use regex::Regex;
use style_lint_core::utils::is_camel_case;
use style_lint_core::{BlankRunState, LineContext, LineRule, Violation};

/// Rule code for class-naming.
pub const CODE: &str = "S008";

/// Rule name for class-naming.
pub const NAME: &str = "class-naming";

/// Flags class declarations whose name is not `CamelCase`.
#[derive(Debug, Clone)]
pub struct ClassNaming {
    pattern: Regex,
}

impl Default for ClassNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^\s*class\s+(\w+)").expect("Invalid regex"),
        }
    }
}

impl LineRule for ClassNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Class names not in CamelCase"
    }

    fn check(&self, ctx: &LineContext<'_>, _state: &mut BlankRunState) -> Option<Violation> {
        let name = self.pattern.captures(ctx.text)?.get(1)?.as_str();
        if is_camel_case(name) {
            return None;
        }
        Some(Violation::new(
            CODE,
            NAME,
            format!("Class name '{name}' should use CamelCase"),
        ))
    }
}
