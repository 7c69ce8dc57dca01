//! Last-good-state holder for one analyzed module
//!
//! Re-analysis is all or nothing: a parse failure leaves the previous
//! snapshot untouched, so a consumer rendering the snapshot never sees a
//! half-built graph.

use trellis_analyzer::{AnalyzeError, analyze, generate_hints};
use trellis_core::CodeGraph;
use trellis_layout::{LayoutConfig, PositionMap, layout};

/// The complete result of one successful analysis run. Replaced wholesale,
/// never mutated in place.
pub struct AnalysisSnapshot {
    pub source: String,
    pub graph: CodeGraph,
    pub positions: PositionMap,
    pub hints: Vec<String>,
}

/// Owns the current source text and the snapshot of its last successful
/// analysis. Debouncing rapid edits is the caller's responsibility; every
/// `apply_text` runs the pipeline to completion.
#[derive(Default)]
pub struct Document {
    snapshot: Option<AnalysisSnapshot>,
}

impl Document {
    pub fn new() -> Self {
        Document { snapshot: None }
    }

    /// Analyze `text` and replace the snapshot on success. On failure the
    /// prior snapshot stays valid and the error propagates to the caller.
    pub fn apply_text(
        &mut self,
        text: &str,
        config: &LayoutConfig,
    ) -> Result<&AnalysisSnapshot, AnalyzeError> {
        let graph = analyze(text)?;
        let positions = layout(&graph, config);
        let hints = generate_hints(&graph, text);

        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            hints = hints.len(),
            "document updated"
        );

        Ok(&*self.snapshot.insert(AnalysisSnapshot {
            source: text.to_string(),
            graph,
            positions,
            hints,
        }))
    }

    /// The last successful analysis, if any.
    pub fn snapshot(&self) -> Option<&AnalysisSnapshot> {
        self.snapshot.as_ref()
    }
}
