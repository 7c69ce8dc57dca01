//! Declaration and reference extraction
//!
//! Walks the whole tree for definitions, but reference edges come from a
//! deliberately shallow scan: only the immediate children of a definition are
//! inspected for bare names. Nested statement bodies are descended into to
//! discover further definitions, never for edge purposes, so this
//! under-approximates the real call graph. Targets that never resolve to a
//! declaration are filtered later, at graph insertion.

use crate::ast::AstNode;
use trellis_core::{EdgeKind, GraphEdge, GraphNode, NodeKind};

/// Extract declaration nodes and shallow reference edges from a module tree.
pub fn extract_structure(root: &AstNode, source: &str) -> (Vec<GraphNode>, Vec<GraphEdge>) {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    visit(root, source, &mut nodes, &mut edges);
    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "structure extraction complete"
    );
    (nodes, edges)
}

fn visit(node: &AstNode, source: &str, nodes: &mut Vec<GraphNode>, edges: &mut Vec<GraphEdge>) {
    match node {
        AstNode::FunctionDef {
            name, body, span, ..
        } => {
            nodes.push(GraphNode::new(
                name.clone(),
                NodeKind::Function,
                *span,
                span.slice(source),
            ));
            edges.extend(shallow_references(name, body));
            for child in body {
                visit(child, source, nodes, edges);
            }
        }
        AstNode::ClassDef { name, body, span } => {
            nodes.push(GraphNode::new(
                name.clone(),
                NodeKind::Type,
                *span,
                span.slice(source),
            ));
            edges.extend(shallow_references(name, body));
            for child in body {
                visit(child, source, nodes, edges);
            }
        }
        _ => {
            for child in node.children() {
                visit(child, source, nodes, edges);
            }
        }
    }
}

// TODO: a deeper, intentionally-scoped traversal would catch calls nested
// under return/if/for statements; keep the scan isolated here so that change
// lands in one place.
fn shallow_references(definition: &str, body: &[AstNode]) -> Vec<GraphEdge> {
    body.iter()
        .filter_map(|child| match child {
            AstNode::Name { id, .. } => {
                Some(GraphEdge::new(definition, id.clone(), EdgeKind::Reference))
            }
            _ => None,
        })
        .collect()
}
