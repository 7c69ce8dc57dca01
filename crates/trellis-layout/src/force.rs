//! Spring simulation
//!
//! Classic force-directed placement: every pair of nodes repels with an
//! inverse-square force, every edge pulls its endpoints together in
//! proportion to how far the spring is stretched past its rest length, and a
//! linearly cooling cap on per-step displacement makes the system settle
//! instead of oscillating. All-pairs repulsion makes a step O(n²), which
//! bounds practical graphs to the hundreds of nodes.

use crate::{LayoutConfig, Position, PositionMap};
use std::collections::HashMap;
use trellis_core::CodeGraph;

/// Two coincident nodes are pushed apart by at least this much before force
/// evaluation, so the inverse-square term never divides by zero.
const MIN_SEPARATION: f64 = 0.01;

/// Compute a position for every node in the graph.
///
/// Total: the returned map has exactly one finite entry per node, including
/// isolated nodes. Deterministic for a fixed config.
pub fn layout(graph: &CodeGraph, config: &LayoutConfig) -> PositionMap {
    let mut names: Vec<&str> = graph.nodes().map(|n| n.name.as_str()).collect();
    names.sort_unstable();

    match names.len() {
        0 => return PositionMap::new(),
        1 => {
            let mut positions = PositionMap::new();
            positions.insert(names[0].to_string(), Position::new(0.0, 0.0));
            return positions;
        }
        _ => {}
    }

    let count = names.len();
    let index: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, i))
        .collect();

    // Every edge in the graph has live endpoints, so both lookups resolve.
    let edges: Vec<(usize, usize)> = graph
        .edges()
        .filter_map(|e| {
            let source = *index.get(e.source.as_str())?;
            let target = *index.get(e.target.as_str())?;
            Some((source, target))
        })
        .collect();

    let mut rng = SplitMix64::new(config.seed);
    let spread = config.bounds * 0.5;
    let mut positions: Vec<(f64, f64)> = (0..count)
        .map(|_| {
            (
                (rng.next_f64() * 2.0 - 1.0) * spread,
                (rng.next_f64() * 2.0 - 1.0) * spread,
            )
        })
        .collect();

    let max_step = config.bounds * 0.25;
    let mut displacement = vec![(0.0f64, 0.0f64); count];

    for step in 0..config.iterations {
        // Cooling schedule: the displacement cap shrinks linearly to zero.
        let temperature =
            max_step * ((config.iterations - step) as f64 / config.iterations as f64);

        displacement.fill((0.0, 0.0));

        for i in 0..count {
            for j in (i + 1)..count {
                let mut dx = positions[i].0 - positions[j].0;
                let mut dy = positions[i].1 - positions[j].1;
                let mut dist_sq = dx * dx + dy * dy;
                if dist_sq < MIN_SEPARATION * MIN_SEPARATION {
                    // Deterministic epsilon perturbation for coincident nodes.
                    dx = MIN_SEPARATION * (i as f64 + 1.0);
                    dy = MIN_SEPARATION * (j as f64 + 1.0);
                    dist_sq = dx * dx + dy * dy;
                }
                let dist = dist_sq.sqrt();
                let force = config.repulsion / dist_sq;
                let (ux, uy) = (dx / dist, dy / dist);
                displacement[i].0 += ux * force;
                displacement[i].1 += uy * force;
                displacement[j].0 -= ux * force;
                displacement[j].1 -= uy * force;
            }
        }

        for &(source, target) in &edges {
            if source == target {
                continue;
            }
            let dx = positions[target].0 - positions[source].0;
            let dy = positions[target].1 - positions[source].1;
            let dist = (dx * dx + dy * dy).sqrt().max(MIN_SEPARATION);
            let stretch = dist - config.ideal_edge_length;
            let force = config.spring * stretch;
            let (ux, uy) = (dx / dist, dy / dist);
            displacement[source].0 += ux * force;
            displacement[source].1 += uy * force;
            displacement[target].0 -= ux * force;
            displacement[target].1 -= uy * force;
        }

        for i in 0..count {
            let (dx, dy) = displacement[i];
            let length = (dx * dx + dy * dy).sqrt();
            if length > 0.0 {
                let capped = length.min(temperature);
                positions[i].0 += dx / length * capped;
                positions[i].1 += dy / length * capped;
            }
        }
    }

    rescale_into_bounds(&mut positions, config.bounds);

    tracing::debug!(nodes = count, edges = edges.len(), "layout complete");

    names
        .iter()
        .zip(positions)
        .map(|(&name, (x, y))| (name.to_string(), Position::new(x, y)))
        .collect()
}

/// Uniformly scale positions so the farthest coordinate lands on the window
/// edge at most, then clamp for floating-point safety.
fn rescale_into_bounds(positions: &mut [(f64, f64)], bounds: f64) {
    let max_extent = positions
        .iter()
        .map(|&(x, y)| x.abs().max(y.abs()))
        .fold(0.0f64, f64::max);

    if max_extent > bounds {
        let scale = bounds / max_extent;
        for position in positions.iter_mut() {
            position.0 *= scale;
            position.1 *= scale;
        }
    }

    for position in positions.iter_mut() {
        position.0 = position.0.clamp(-bounds, bounds);
        position.1 = position.1.clamp(-bounds, bounds);
    }
}

/// splitmix64 stream; small, deterministic, and seedable, which is all the
/// initial scatter needs.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
