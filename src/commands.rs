//! CLI command implementations

use serde_json::json;
use std::path::PathBuf;
use trellis_layout::LayoutConfig;
use trellis_session::Document;

/// Run the full pipeline over one file and print the rendering hand-off
/// document: nodes, edges, and one position per node.
pub fn analyze(file: PathBuf, seed: u64, iterations: usize, pretty: bool) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&file)?;

    let config = LayoutConfig {
        seed,
        iterations,
        ..Default::default()
    };

    let mut document = Document::new();
    let snapshot = document.apply_text(&source, &config)?;

    tracing::info!(
        nodes = snapshot.graph.node_count(),
        edges = snapshot.graph.edge_count(),
        "analyzed {}",
        file.display()
    );

    let output = json!({
        "nodes": snapshot.graph.nodes().collect::<Vec<_>>(),
        "edges": snapshot.graph.edges().collect::<Vec<_>>(),
        "positions": snapshot.positions,
    });

    if pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print suggestions for one file, one per line, in generation order.
pub fn hints(file: PathBuf) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&file)?;

    let graph = trellis_analyzer::analyze(&source)?;
    for hint in trellis_analyzer::generate_hints(&graph, &source) {
        println!("{}", hint);
    }

    Ok(())
}
