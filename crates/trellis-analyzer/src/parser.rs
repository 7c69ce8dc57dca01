//! Python source parsing via tree-sitter
//!
//! tree-sitter is error-tolerant and will happily hand back a tree full of
//! ERROR nodes, so `parse_module` walks the raw tree first and reports the
//! first error position instead of returning a partial AST.

use crate::ast::{AssignTarget, AstNode};
use crate::error::{AnalyzeError, Result};
use tree_sitter::{Node, Parser};
use trellis_core::SourceSpan;

/// Parse one module of Python source into an owned AST.
///
/// Fails with `AnalyzeError::Syntax` on malformed input; never returns a
/// partial tree.
pub fn parse_module(source: &str) -> Result<AstNode> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_python::LANGUAGE.into())?;

    let tree = parser.parse(source, None).ok_or(AnalyzeError::ParseFailed)?;
    let root = tree.root_node();

    if root.has_error() {
        let (line, column) = first_error_position(root);
        tracing::debug!(line, column, "rejecting malformed source");
        return Err(AnalyzeError::Syntax { line, column });
    }

    Ok(lower(root, source))
}

/// Locate the first ERROR or missing node. 1-based line/column.
fn first_error_position(node: Node) -> (u32, u32) {
    fn find(node: Node) -> Option<(u32, u32)> {
        if node.is_error() || node.is_missing() {
            let point = node.start_position();
            return Some((point.row as u32 + 1, point.column as u32 + 1));
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(pos) = find(child) {
                return Some(pos);
            }
        }
        None
    }
    let point = node.start_position();
    find(node).unwrap_or((point.row as u32 + 1, point.column as u32 + 1))
}

fn span_of(node: Node) -> SourceSpan {
    SourceSpan::new(node.start_byte(), node.end_byte())
}

fn text_of<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

/// Lower a raw tree-sitter node into the closed AST.
fn lower(node: Node, source: &str) -> AstNode {
    let span = span_of(node);
    match node.kind() {
        "module" => AstNode::Module {
            body: lower_statements(node, source),
            span,
        },
        // The decorator list is presentation; lower straight to the wrapped
        // definition so it sits directly in its parent's body.
        "decorated_definition" => match node.child_by_field_name("definition") {
            Some(def) => lower(def, source),
            None => lower_other(node, source),
        },
        "function_definition" => {
            let name = node
                .child_by_field_name("name")
                .map(|n| text_of(n, source).to_string())
                .unwrap_or_default();
            let params = node
                .child_by_field_name("parameters")
                .map(|p| parameter_names(p, source))
                .unwrap_or_default();
            let body = node
                .child_by_field_name("body")
                .map(|b| lower_statements(b, source))
                .unwrap_or_default();
            AstNode::FunctionDef {
                name,
                params,
                body,
                span,
            }
        }
        "class_definition" => {
            let name = node
                .child_by_field_name("name")
                .map(|n| text_of(n, source).to_string())
                .unwrap_or_default();
            let body = node
                .child_by_field_name("body")
                .map(|b| lower_statements(b, source))
                .unwrap_or_default();
            AstNode::ClassDef { name, body, span }
        }
        "assignment" => {
            let target = match node.child_by_field_name("left") {
                Some(left) if left.kind() == "identifier" => {
                    AssignTarget::Name(text_of(left, source).to_string())
                }
                _ => AssignTarget::Unsupported,
            };
            let value = match node.child_by_field_name("right") {
                Some(right) => lower(right, source),
                None => AstNode::Other {
                    children: Vec::new(),
                    span,
                },
            };
            AstNode::Assign {
                target,
                value: Box::new(value),
                span,
            }
        }
        "identifier" => AstNode::Name {
            id: text_of(node, source).to_string(),
            span,
        },
        "call" => {
            let func = node
                .child_by_field_name("function")
                .map(|f| lower(f, source))
                .unwrap_or(AstNode::Other {
                    children: Vec::new(),
                    span,
                });
            let args = node
                .child_by_field_name("arguments")
                .map(|a| lower_named_children(a, source))
                .unwrap_or_default();
            AstNode::Call {
                func: Box::new(func),
                args,
                span,
            }
        }
        _ => lower_other(node, source),
    }
}

fn lower_other(node: Node, source: &str) -> AstNode {
    AstNode::Other {
        children: lower_named_children(node, source),
        span: span_of(node),
    }
}

/// Lower the named children of a statement container (module or block).
/// Single-expression statements are unwrapped so a bare identifier statement
/// becomes an immediate `Name` child of its enclosing definition.
fn lower_statements(node: Node, source: &str) -> Vec<AstNode> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| {
            if child.kind() == "expression_statement" && child.named_child_count() == 1 {
                match child.named_child(0) {
                    Some(inner) => lower(inner, source),
                    None => lower_other(child, source),
                }
            } else {
                lower(child, source)
            }
        })
        .collect()
}

fn lower_named_children(node: Node, source: &str) -> Vec<AstNode> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| lower(child, source))
        .collect()
}

/// Collect parameter names from a `parameters` node, covering plain, typed,
/// defaulted, and splat shapes.
fn parameter_names(node: Node, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter_map(|child| match child.kind() {
            "identifier" => Some(text_of(child, source).to_string()),
            "typed_parameter" | "list_splat_pattern" | "dictionary_splat_pattern" => {
                first_identifier(child, source)
            }
            "default_parameter" | "typed_default_parameter" => child
                .child_by_field_name("name")
                .and_then(|n| first_identifier_or_self(n, source)),
            _ => None,
        })
        .collect()
}

fn first_identifier_or_self(node: Node, source: &str) -> Option<String> {
    if node.kind() == "identifier" {
        return Some(text_of(node, source).to_string());
    }
    first_identifier(node, source)
}

fn first_identifier(node: Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_identifier_or_self(child, source) {
            return Some(found);
        }
    }
    None
}
