//! Rule-of-thumb suggestion generator
//!
//! Consumes extracted structure plus raw source and returns human-readable
//! suggestion strings, order-preserving. These are cheap textual heuristics,
//! not semantic analysis.

use trellis_core::{CodeGraph, NodeKind};

const MAX_DEF_LINES: usize = 30;
const MAX_PARAMS: usize = 5;
const MAX_LINE_WIDTH: usize = 100;

/// Generate suggestions for the analyzed module.
pub fn generate_hints(graph: &CodeGraph, source: &str) -> Vec<String> {
    let mut hints = Vec::new();

    if graph.node_count() == 0 {
        hints.push("module defines no functions or classes".to_string());
    }

    for node in graph.nodes() {
        let line_count = node.content.lines().count();
        if line_count > MAX_DEF_LINES {
            hints.push(format!(
                "`{}` spans {} lines; consider splitting it up",
                node.name, line_count
            ));
        }

        match node.kind {
            NodeKind::Function => {
                let params = signature_param_count(&node.content);
                if params > MAX_PARAMS {
                    hints.push(format!(
                        "`{}` takes {} parameters; consider grouping related ones",
                        node.name, params
                    ));
                }
            }
            NodeKind::Type => {
                let referenced = graph.edges().any(|e| e.target == node.name);
                if !referenced {
                    hints.push(format!("class `{}` is never referenced", node.name));
                }
            }
        }
    }

    for (index, line) in source.lines().enumerate() {
        if line.chars().count() > MAX_LINE_WIDTH {
            hints.push(format!(
                "line {} exceeds {} characters",
                index + 1,
                MAX_LINE_WIDTH
            ));
        }
    }

    hints
}

/// Count parameters in the first signature line of a definition. Textual
/// heuristic only: splits the parenthesized list on commas.
fn signature_param_count(content: &str) -> usize {
    let Some(first_line) = content.lines().next() else {
        return 0;
    };
    let Some(open) = first_line.find('(') else {
        return 0;
    };
    let Some(close) = first_line.rfind(')') else {
        return 0;
    };
    if close <= open + 1 {
        return 0;
    }
    first_line[open + 1..close]
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .count()
}
