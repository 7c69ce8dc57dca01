//! Assignment data-flow extraction
//!
//! Each simple single-name assignment yields an edge from the verbatim text
//! of its right-hand expression to the bound name. The RHS identity is raw
//! text, not a resolved value; if no declaration carries that exact name the
//! edge drops at graph insertion. Tuple/attribute/subscript targets are
//! skipped without error.

use crate::ast::{AssignTarget, AstNode};
use trellis_core::{EdgeKind, GraphEdge};

/// Extract data-flow edges from assignments at any depth.
pub fn extract_data_flow(root: &AstNode, source: &str) -> Vec<GraphEdge> {
    let mut edges = Vec::new();
    visit(root, source, &mut edges);
    tracing::debug!(edges = edges.len(), "data-flow extraction complete");
    edges
}

fn visit(node: &AstNode, source: &str, edges: &mut Vec<GraphEdge>) {
    if let AstNode::Assign { target, value, .. } = node {
        match target {
            AssignTarget::Name(bound) => {
                let rhs = value.span().slice(source).trim();
                edges.push(GraphEdge::new(rhs, bound.clone(), EdgeKind::DataFlow));
            }
            AssignTarget::Unsupported => {
                tracing::trace!("skipping unsupported assignment target");
            }
        }
    }
    for child in node.children() {
        visit(child, source, edges);
    }
}
