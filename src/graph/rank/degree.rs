// src/graph/rank/degree.rs
//! Degree centrality: neighbor counts in one direction.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// Number of distinct neighbors of every node in `direction`, indexed by
/// node index.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &DiGraph<(), f64>, direction: Direction) -> Vec<f64> {
    (0..graph.node_count())
        .map(|index| {
            let mut neighbors: Vec<NodeIndex> = graph
                .neighbors_directed(NodeIndex::new(index), direction)
                .collect();
            neighbors.sort_unstable();
            neighbors.dedup();
            neighbors.len() as f64
        })
        .collect()
}
