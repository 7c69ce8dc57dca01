//! Trellis Layout — force-directed placement of the module graph

pub mod force;


pub use force::layout;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A finite 2-D coordinate assigned to one graph node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Node name → position. One entry per graph node, recomputed from scratch
/// on every layout run.
pub type PositionMap = HashMap<String, Position>;

/// Tuning knobs for the spring simulation. The seed is explicit so runs are
/// reproducible: same graph + same config ⇒ identical positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Simulation steps.
    pub iterations: usize,
    /// Seed for initial placement.
    pub seed: u64,
    /// Rest length of the spring along each edge.
    pub ideal_edge_length: f64,
    /// Coulomb-like constant for the all-pairs repulsion term.
    pub repulsion: f64,
    /// Hooke constant for the per-edge attraction term.
    pub spring: f64,
    /// Half-extent of the final coordinate window: positions land in
    /// [-bounds, +bounds] on both axes.
    pub bounds: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            iterations: 100,
            seed: 42,
            ideal_edge_length: 120.0,
            repulsion: 50_000.0,
            spring: 0.05,
            bounds: 500.0,
        }
    }
}
