//! Graph container using petgraph::StableDiGraph keyed by declaration name

use crate::model::{EdgeKind, GraphEdge, GraphNode};
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// The module graph — a directed multigraph of declarations, rebuilt from
/// scratch on every analysis run.
pub struct CodeGraph {
    inner: StableDiGraph<GraphNode, GraphEdge>,
    by_name: HashMap<String, NodeIndex>,
}

impl std::fmt::Debug for CodeGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl CodeGraph {
    pub fn new() -> Self {
        CodeGraph {
            inner: StableDiGraph::new(),
            by_name: HashMap::new(),
        }
    }

    /// Insert a node, overwriting any existing node with the same name.
    /// Edges attached under the old node survive since identity is the name.
    pub fn add_node(&mut self, node: GraphNode) {
        match self.by_name.get(&node.name) {
            Some(&idx) => {
                if let Some(existing) = self.inner.node_weight_mut(idx) {
                    tracing::debug!(name = %node.name, "overwriting duplicate declaration");
                    *existing = node;
                }
            }
            None => {
                let name = node.name.clone();
                let idx = self.inner.add_node(node);
                self.by_name.insert(name, idx);
            }
        }
    }

    /// Insert an edge if both endpoints are present as nodes. Returns whether
    /// the edge was kept; a discarded edge is an expected outcome, not an
    /// error. Exact (source, target, kind) duplicates are not re-inserted.
    pub fn add_edge(&mut self, source: &str, target: &str, kind: EdgeKind) -> bool {
        let (Some(&src), Some(&tgt)) = (self.by_name.get(source), self.by_name.get(target)) else {
            tracing::debug!(source, target, ?kind, "dropping edge with unresolved endpoint");
            return false;
        };
        if self.has_edge_between(source, target, kind) {
            return false;
        }
        self.inner.add_edge(src, tgt, GraphEdge::new(source, target, kind));
        true
    }

    /// Get a node by name.
    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.by_name
            .get(name)
            .and_then(|&idx| self.inner.node_weight(idx))
    }

    /// Whether a declaration with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }

    /// All outgoing edges from a named node.
    pub fn edges_from<'a>(&'a self, source: &str) -> impl Iterator<Item = &'a GraphEdge> {
        self.by_name
            .get(source)
            .into_iter()
            .flat_map(move |&idx| {
                self.inner
                    .edges_directed(idx, Direction::Outgoing)
                    .filter_map(move |edge_ref| self.inner.edge_weight(edge_ref.id()))
            })
    }

    /// Check if an edge of a specific kind exists between two named nodes.
    pub fn has_edge_between(&self, source: &str, target: &str, kind: EdgeKind) -> bool {
        self.edges_from(source)
            .any(|e| e.target == target && e.kind == kind)
    }

    /// Names of nodes adjacent to `name` (either direction), deduplicated.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for edge in self.edges() {
            let other = if edge.source == name {
                edge.target.as_str()
            } else if edge.target == name {
                edge.source.as_str()
            } else {
                continue;
            };
            if !out.contains(&other) {
                out.push(other);
            }
        }
        out
    }

    /// Reset to empty, used at the start of each re-analysis.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.by_name.clear();
    }
}

impl Default for CodeGraph {
    fn default() -> Self {
        Self::new()
    }
}
