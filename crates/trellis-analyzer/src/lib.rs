//! Trellis Analyzer — parsing, structure extraction, and data-flow extraction

pub mod ast;
pub mod dataflow;
pub mod error;
pub mod hints;
pub mod parser;
pub mod structure;


pub use ast::{AssignTarget, AstNode};
pub use dataflow::extract_data_flow;
pub use error::{AnalyzeError, Result};
pub use hints::generate_hints;
pub use parser::parse_module;
pub use structure::extract_structure;

use trellis_core::CodeGraph;

/// Run the full analysis pipeline over one module of source text.
///
/// Parse, extract declarations and edges, and assemble the graph. Nodes are
/// inserted before edges so the both-endpoints-present invariant filters
/// every dangling reference and unresolved data-flow source. Fails atomically
/// on malformed input: an `Err` means no graph was produced at all.
pub fn analyze(source: &str) -> Result<CodeGraph> {
    let root = parser::parse_module(source)?;

    let (nodes, reference_edges) = structure::extract_structure(&root, source);
    let flow_edges = dataflow::extract_data_flow(&root, source);

    let mut graph = CodeGraph::new();
    for node in nodes {
        graph.add_node(node);
    }

    let mut kept = 0usize;
    let mut dropped = 0usize;
    for edge in reference_edges.iter().chain(flow_edges.iter()) {
        if graph.add_edge(&edge.source, &edge.target, edge.kind) {
            kept += 1;
        } else {
            dropped += 1;
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = kept,
        dropped,
        "analysis complete"
    );
    Ok(graph)
}
