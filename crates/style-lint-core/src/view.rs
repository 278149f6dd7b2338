//! Structural view of a source file and the parser seam that produces it.
//!
//! `SourceParser` is the extension point for the language being analyzed.
//! Implementations turn raw source text into a [`StructuralView`]: the
//! function definitions and name bindings that structural rules inspect.

use thiserror::Error;

/// Kind of a parameter's default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultKind {
    /// `[...]`
    List,
    /// `{key: value}`
    Dict,
    /// `{item, ...}`
    Set,
    /// Any other expression.
    Other,
}

impl DefaultKind {
    /// Whether the literal builds a fresh mutable container.
    #[must_use]
    pub fn is_mutable(self) -> bool {
        matches!(self, Self::List | Self::Dict | Self::Set)
    }
}

/// A formal parameter of a function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Bound name, without `*` / `**` prefixes.
    pub name: String,
    /// Kind of the default value, if the parameter has one.
    pub default: Option<DefaultKind>,
}

/// A function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Position in the structural walk, shared with bindings.
    pub step: usize,
    /// Line of the `def` keyword (1-indexed).
    pub line: usize,
    /// Function name.
    pub name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

/// A name bound by an assignment-like construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Position in the structural walk, shared with function definitions.
    pub step: usize,
    /// Line of the bound name (1-indexed).
    pub line: usize,
    /// Bound name.
    pub name: String,
}

/// Parsed representation of one file.
///
/// Functions and bindings are numbered by one shared walk over the syntax
/// tree: breadth-first, so every item at one nesting depth comes before the
/// items nested below it. Both lists are sorted by `step`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralView {
    /// Function definitions at any nesting depth.
    pub functions: Vec<FunctionDef>,
    /// Every binding occurrence at any nesting depth.
    pub bindings: Vec<Binding>,
}

impl StructuralView {
    /// Iterates function definitions in walk order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDef> + '_ {
        self.functions.iter()
    }

    /// Iterates bindings in walk order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> + '_ {
        self.bindings.iter()
    }
}

/// The source text is not valid syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// Line of the first syntax error (1-indexed).
    pub line: usize,
    /// Description of the error.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Trait for language-specific structural parsing.
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"python"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this parser handles, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Parses `source` into a structural view.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the source contains syntax errors.
    fn parse(&self, source: &str) -> Result<StructuralView, ParseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_container_literals_are_mutable() {
        assert!(DefaultKind::List.is_mutable());
        assert!(DefaultKind::Dict.is_mutable());
        assert!(DefaultKind::Set.is_mutable());
        assert!(!DefaultKind::Other.is_mutable());
    }

    #[test]
    fn parse_error_display() {
        let e = ParseError::new(3, "unexpected token");
        assert_eq!(e.to_string(), "line 3: unexpected token");
    }
}
