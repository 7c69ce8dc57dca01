//! Core data structures for the module graph

use serde::{Deserialize, Serialize};

/// Discriminates what kind of declaration a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Function-like definition (includes methods).
    Function,
    /// Type-like definition (classes).
    Type,
}

/// Byte-offset range into the analyzed source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        SourceSpan { start, end }
    }

    /// The verbatim slice of `source` this span covers.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end.min(source.len())]
    }
}

/// A single declaration node. Identity is the declaration name: the graph
/// holds at most one node per name, later duplicates overwrite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    pub name: String,
    pub kind: NodeKind,
    pub span: SourceSpan,
    /// Verbatim source text of the whole definition.
    pub content: String,
}

impl GraphNode {
    pub fn new(name: impl Into<String>, kind: NodeKind, span: SourceSpan, content: impl Into<String>) -> Self {
        GraphNode {
            name: name.into(),
            kind,
            span,
            content: content.into(),
        }
    }
}

/// What kind of relationship an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Approximate "A mentions B", from the shallow identifier scan.
    Reference,
    /// Assignment relationship: RHS expression text flows into the bound name.
    DataFlow,
}

/// A directed edge between two named declarations. Endpoints are node names;
/// an edge only materializes once both names exist in the graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
        GraphEdge {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}
