//! Python structural parser using Tree-sitter.
//!
//! Both passes over the tree (validation, then extraction) walk it with an
//! explicit stack, so deeply nested source cannot exhaust the call stack.
//!
//! # Walk order
//!
//! Extracted functions and bindings are numbered breadth-first over the
//! Python syntax tree: every item at one nesting depth precedes the items
//! nested below it, and items at the same depth keep source order. Some
//! Tree-sitter nodes have no counterpart in that tree (`block`, an
//! `expression_statement` around an assignment, a parenthesized
//! expression, ...) and do not add depth. An `elif` nests one level deeper
//! than the branch before it.

use style_lint_core::{
    Binding, DefaultKind, FunctionDef, Parameter, ParseError, SourceParser, StructuralView,
};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

/// Deepest bracket nesting the Python tokenizer accepts.
const MAX_BRACKET_DEPTH: usize = 200;

/// Nodes that pass an assignment target on to their children.
const TARGET_CONTAINERS: &[&str] = &[
    "pattern_list",
    "tuple_pattern",
    "list_pattern",
    "list_splat_pattern",
    "parenthesized_expression",
    "tuple",
    "list",
    "expression_list",
    "as_pattern_target",
];

/// Breadth-first sort key: (depth, pre-order index).
type WalkKey = (usize, usize);

/// A node waiting in the extraction walk.
struct Frame<'t> {
    node: Node<'t>,
    /// Depth of the nearest enclosing node that adds depth.
    base: usize,
    /// Whether the node is (part of) an assignment target.
    target: bool,
}

/// Extracts function definitions and name bindings from Python source.
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    /// Creates a new Python parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        node.utf8_text(src).unwrap_or("")
    }

    fn line(node: &Node<'_>) -> usize {
        node.start_position().row + 1
    }

    fn children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        node.children(&mut cursor).collect()
    }

    fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor).collect()
    }

    /// Finds the first construct, in source order, that Python rejects.
    ///
    /// Besides Tree-sitter's own `ERROR` / `MISSING` nodes this covers what
    /// the grammar accepts but Python 3 does not: Python 2 `print` / `exec`
    /// statements, a parameter without a default after one with a default,
    /// and brackets nested deeper than the tokenizer allows.
    fn validate(root: Node<'_>, src: &[u8]) -> Result<(), ParseError> {
        let mut brackets = 0usize;
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if node.is_error() || node.is_missing() {
                return Err(Self::syntax_error(&node, src));
            }
            match node.kind() {
                "print_statement" => {
                    return Err(ParseError::new(
                        Self::line(&node),
                        "Missing parentheses in call to 'print'",
                    ));
                }
                "exec_statement" => {
                    return Err(ParseError::new(
                        Self::line(&node),
                        "Missing parentheses in call to 'exec'",
                    ));
                }
                "parameters" | "lambda_parameters" => Self::check_parameter_order(node)?,
                "(" | "[" | "{" => {
                    if brackets >= MAX_BRACKET_DEPTH {
                        return Err(ParseError::new(
                            Self::line(&node),
                            "too many nested parentheses",
                        ));
                    }
                    brackets += 1;
                }
                ")" | "]" | "}" => brackets = brackets.saturating_sub(1),
                _ => {}
            }
            stack.extend(Self::children(node).into_iter().rev());
        }
        Ok(())
    }

    fn syntax_error(node: &Node<'_>, src: &[u8]) -> ParseError {
        let message = if node.is_missing() {
            format!("missing '{}'", node.kind())
        } else {
            let snippet: String = Self::text(node, src).chars().take(20).collect();
            format!("invalid syntax near '{}'", snippet.trim())
        };
        ParseError::new(Self::line(node), message)
    }

    /// Rejects a positional parameter without a default that follows one
    /// with a default. Everything after `*`, `*args` or `**kwargs` is
    /// keyword-only and exempt.
    fn check_parameter_order(params: Node<'_>) -> Result<(), ParseError> {
        let mut seen_default = false;
        for param in Self::named_children(params) {
            let splat = match param.kind() {
                "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => true,
                "typed_parameter" => Self::named_children(param).first().is_some_and(|c| {
                    matches!(c.kind(), "list_splat_pattern" | "dictionary_splat_pattern")
                }),
                _ => false,
            };
            if splat {
                return Ok(());
            }
            match param.kind() {
                "default_parameter" | "typed_default_parameter" => seen_default = true,
                "identifier" | "typed_parameter" if seen_default => {
                    return Err(ParseError::new(
                        Self::line(&param),
                        "parameter without a default follows parameter with a default",
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Whether `node` has no node of its own in the Python syntax tree.
    fn is_transparent(node: Node<'_>) -> bool {
        match node.kind() {
            "block" | "decorated_definition" | "decorator" | "parenthesized_expression"
            | "else_clause" | "finally_clause" | "with_clause" | "as_pattern"
            | "argument_list" | "pair" | "type" | "if_clause" | "default_parameter"
            | "typed_default_parameter" | "typed_parameter" | "comment" => true,
            // `x = 1` is a bare assignment statement, not an expression
            "expression_statement" => Self::named_children(node)
                .first()
                .is_some_and(|c| matches!(c.kind(), "assignment" | "augmented_assignment")),
            // `a = b = 1` is one statement with two targets
            "assignment" => node.parent().is_some_and(|p| p.kind() == "assignment"),
            _ => false,
        }
    }

    /// The child of `node` that binds names, if `node` is a binding construct.
    fn target_field<'t>(node: Node<'t>) -> Option<Node<'t>> {
        match node.kind() {
            "assignment" | "augmented_assignment" | "for_statement" | "for_in_clause" => {
                node.child_by_field_name("left")
            }
            "named_expression" => node.child_by_field_name("name"),
            "as_pattern" if node.parent().is_some_and(|p| p.kind() == "with_item") => {
                node.child_by_field_name("alias")
            }
            _ => None,
        }
    }

    fn collect(root: Node<'_>, src: &[u8]) -> StructuralView {
        let mut functions: Vec<(WalkKey, FunctionDef)> = Vec::new();
        let mut bindings: Vec<(WalkKey, Binding)> = Vec::new();
        let mut stack = vec![Frame {
            node: root,
            base: 0,
            target: false,
        }];
        let mut index = 0usize;

        while let Some(Frame { node, base, target }) = stack.pop() {
            index += 1;
            let depth = if Self::is_transparent(node) {
                base
            } else {
                base + 1
            };
            let children = Self::named_children(node);

            match node.kind() {
                "function_definition" => {
                    if let Some(func) = Self::extract_function(&node, src) {
                        functions.push(((depth, index), func));
                    }
                }
                "identifier" | "keyword_identifier" if target => {
                    bindings.push(((depth, index), Self::binding(&node, src)));
                }
                // an aliased bare name is a renamed identifier
                "as_pattern_target" if target && children.is_empty() => {
                    bindings.push(((depth, index), Self::binding(&node, src)));
                }
                _ => {}
            }

            let target_field = Self::target_field(node);
            let passes_target = target && TARGET_CONTAINERS.contains(&node.kind());
            let mut elifs = 0;
            let mut frames = Vec::with_capacity(children.len());
            for child in children {
                let child_base = match child.kind() {
                    "elif_clause" => {
                        elifs += 1;
                        depth + elifs - 1
                    }
                    "else_clause" if node.kind() == "if_statement" => depth + elifs,
                    _ => depth,
                };
                let child_target =
                    passes_target || target_field.is_some_and(|f| f.id() == child.id());
                frames.push(Frame {
                    node: child,
                    base: child_base,
                    target: child_target,
                });
            }
            stack.extend(frames.into_iter().rev());
        }

        let mut keys: Vec<WalkKey> = functions
            .iter()
            .map(|(k, _)| *k)
            .chain(bindings.iter().map(|(k, _)| *k))
            .collect();
        keys.sort_unstable();
        let step_of = |key: WalkKey| keys.binary_search(&key).unwrap_or_else(|i| i);

        let mut functions: Vec<FunctionDef> = functions
            .into_iter()
            .map(|(key, func)| FunctionDef {
                step: step_of(key),
                ..func
            })
            .collect();
        let mut bindings: Vec<Binding> = bindings
            .into_iter()
            .map(|(key, binding)| Binding {
                step: step_of(key),
                ..binding
            })
            .collect();
        functions.sort_by_key(|f| f.step);
        bindings.sort_by_key(|b| b.step);

        StructuralView {
            functions,
            bindings,
        }
    }

    fn binding(node: &Node<'_>, src: &[u8]) -> Binding {
        Binding {
            step: 0,
            line: Self::line(node),
            name: Self::text(node, src).to_owned(),
        }
    }

    fn extract_function(node: &Node<'_>, src: &[u8]) -> Option<FunctionDef> {
        let name = Self::text(&node.child_by_field_name("name")?, src).to_owned();

        let parameters = node
            .child_by_field_name("parameters")
            .map(|params| {
                Self::named_children(params)
                    .iter()
                    .filter_map(|p| Self::extract_parameter(p, src))
                    .collect()
            })
            .unwrap_or_default();

        Some(FunctionDef {
            step: 0,
            line: Self::line(node),
            name,
            parameters,
        })
    }

    fn extract_parameter(node: &Node<'_>, src: &[u8]) -> Option<Parameter> {
        match node.kind() {
            "identifier" => Some(Parameter {
                name: Self::text(node, src).to_owned(),
                default: None,
            }),
            "list_splat_pattern" | "dictionary_splat_pattern" => Some(Parameter {
                name: Self::splat_name(node, src)?,
                default: None,
            }),
            "typed_parameter" => {
                let target = Self::named_children(*node)
                    .into_iter()
                    .find(|c| c.kind() != "type")?;
                let name = match target.kind() {
                    "identifier" => Self::text(&target, src).to_owned(),
                    _ => Self::splat_name(&target, src)?,
                };
                Some(Parameter {
                    name,
                    default: None,
                })
            }
            "default_parameter" | "typed_default_parameter" => {
                let name = Self::text(&node.child_by_field_name("name")?, src).to_owned();
                let default = node
                    .child_by_field_name("value")
                    .map(Self::classify_default);
                Some(Parameter { name, default })
            }
            _ => None,
        }
    }

    /// Name inside `*args` / `**kwargs`.
    fn splat_name(node: &Node<'_>, src: &[u8]) -> Option<String> {
        let ident = Self::named_children(*node)
            .into_iter()
            .find(|c| c.kind() == "identifier")?;
        Some(Self::text(&ident, src).to_owned())
    }

    fn classify_default(mut node: Node<'_>) -> DefaultKind {
        while node.kind() == "parenthesized_expression" {
            match Self::named_children(node).first() {
                Some(inner) => node = *inner,
                None => break,
            }
        }
        match node.kind() {
            "list" => DefaultKind::List,
            "dictionary" => DefaultKind::Dict,
            "set" => DefaultKind::Set,
            _ => DefaultKind::Other,
        }
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for PythonParser {
    fn language_id(&self) -> &'static str {
        "python"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn parse(&self, source: &str) -> Result<StructuralView, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::new(0, format!("failed to load Python grammar: {e}")))?;

        let src = source.as_bytes();
        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ParseError::new(0, "parser produced no syntax tree"))?;
        let root = tree.root_node();

        if let Err(err) = Self::validate(root, src) {
            debug!("Syntax error: {err}");
            return Err(err);
        }

        Ok(Self::collect(root, src))
    }
}
