// src/graph/rank/builder.rs
//! Conversion of an accumulated fragment into the ranking graph.

use super::graph::ImportGraph;
use crate::graph::fragment::Graph;

/// Feeds every directed edge of `fragment` into a new [`ImportGraph`],
/// carrying accumulated weights over. Nodes without edges are kept.
///
/// Nodes are inserted in label order so ids are stable for a given fragment.
#[must_use]
pub fn from_fragment(fragment: &Graph) -> ImportGraph {
    let mut graph = ImportGraph::new();

    let mut labels: Vec<&str> = fragment.nodes.keys().map(|k| k.as_str()).collect();
    labels.sort_unstable();
    for label in labels {
        graph.add_node(label);
    }

    for (src, dst, weight) in fragment.directed_edges() {
        graph.add_weight(src.as_str(), dst.as_str(), weight);
    }
    graph
}

/// Builds an [`ImportGraph`] from raw observations, one `update_edge` each.
#[must_use]
pub fn from_observations<'a, I>(edges: I) -> ImportGraph
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut graph = ImportGraph::new();
    for (from, to) in edges {
        graph.update_edge(from, to);
    }
    graph
}
