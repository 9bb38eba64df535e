// src/graph/rank/graph.rs
//! The weighted import graph used for ranking.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Weighted directed graph over opaque node ids, with label lookups in both
/// directions.
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    pub(crate) graph: DiGraph<(), f64>,
    pub(crate) id_to_label: HashMap<NodeIndex, String>,
    pub(crate) label_to_id: HashMap<String, NodeIndex>,
}

impl ImportGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn id_to_label(&self) -> &HashMap<NodeIndex, String> {
        &self.id_to_label
    }

    #[must_use]
    pub fn label_to_id(&self) -> &HashMap<String, NodeIndex> {
        &self.label_to_id
    }

    #[must_use]
    pub fn label(&self, id: NodeIndex) -> Option<&str> {
        self.id_to_label.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn id(&self, label: &str) -> Option<NodeIndex> {
        self.label_to_id.get(label).copied()
    }

    /// Returns the node for `label`, creating it on first sight.
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(id) = self.id(label) {
            return id;
        }
        let id = self.graph.add_node(());
        self.label_to_id.insert(label.to_string(), id);
        self.id_to_label.insert(id, label.to_string());
        id
    }

    /// Records one more observation of `from -> to`: a new edge gets weight
    /// 1, an existing edge gains 1.
    pub fn update_edge(&mut self, from: &str, to: &str) {
        self.add_weight(from, to, 1.0);
    }

    /// Adds `weight` to the edge `from -> to`, creating nodes and edge as
    /// needed.
    pub fn add_weight(&mut self, from: &str, to: &str, weight: f64) {
        let (a, b) = (self.add_node(from), self.add_node(to));
        let total = self
            .graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .map_or(weight, |prev| prev + weight);
        self.graph.update_edge(a, b, total);
    }

    /// Weight of `from -> to`, if the edge exists.
    #[must_use]
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let edge = self.graph.find_edge(self.id(from)?, self.id(to)?)?;
        self.graph.edge_weight(edge).copied()
    }

    /// The same graph with every edge reversed. Node ids and labels are
    /// preserved.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut graph: DiGraph<(), f64> = DiGraph::with_capacity(self.len(), self.edge_count());
        for _ in self.graph.node_indices() {
            graph.add_node(());
        }
        for edge in self.graph.edge_references() {
            graph.update_edge(edge.target(), edge.source(), *edge.weight());
        }
        Self {
            graph,
            id_to_label: self.id_to_label.clone(),
            label_to_id: self.label_to_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = ImportGraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        assert_ne!(a, b);
        assert_eq!(g.add_node("a"), a);
        assert_eq!(g.len(), 2);
        assert_eq!(g.label(a), Some("a"));
        assert_eq!(g.id("b"), Some(b));
    }

    #[test]
    fn test_update_edge_accumulates() {
        let mut g = ImportGraph::new();
        g.update_edge("a", "b");
        g.update_edge("a", "b");
        assert_eq!(g.weight("a", "b"), Some(2.0));
        assert_eq!(g.weight("b", "a"), None);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_reversed_keeps_ids() {
        let mut g = ImportGraph::new();
        g.add_weight("a", "b", 3.0);
        g.update_edge("b", "c");
        let r = g.reversed();
        assert_eq!(r.weight("b", "a"), Some(3.0));
        assert_eq!(r.weight("c", "b"), Some(1.0));
        assert_eq!(r.weight("a", "b"), None);
        assert_eq!(r.id("c"), g.id("c"));
    }
}
