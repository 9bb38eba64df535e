// src/graph/rank/queries.rs
use std::cmp::Ordering;

use petgraph::graph::NodeIndex;
use petgraph::Direction;
use serde::Serialize;

use super::graph::ImportGraph;
use super::measure::CentralityMeasure;
use super::pagerank::PageRankRun;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    pub label: String,
    pub score: f64,
}

/// Nodes in descending score order. Equal scores are ordered by label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub measure: CentralityMeasure,
    pub ranking: Vec<RankedNode>,
    pub iterations: usize,
    /// L1 change of the last iteration. Zero for exact measures.
    pub delta: f64,
    pub converged: bool,
}

impl Ranking {
    /// Labels and scores as two parallel vectors.
    #[must_use]
    pub fn split(&self) -> (Vec<String>, Vec<f64>) {
        self.ranking
            .iter()
            .map(|n| (n.label.clone(), n.score))
            .unzip()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedNode] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    #[must_use]
    pub fn score_of(&self, label: &str) -> Option<f64> {
        self.ranking
            .iter()
            .find(|n| n.label == label)
            .map(|n| n.score)
    }
}

#[must_use]
pub fn get_ranking(
    graph: &ImportGraph,
    measure: CentralityMeasure,
    run: &PageRankRun,
) -> Ranking {
    let mut ranking: Vec<RankedNode> = run
        .scores
        .iter()
        .enumerate()
        .filter_map(|(index, score)| {
            let label = graph.label(NodeIndex::new(index))?;
            Some(RankedNode {
                label: label.to_string(),
                score: *score,
            })
        })
        .collect();
    ranking.sort_by(compare_ranked);
    Ranking {
        measure,
        ranking,
        iterations: run.iterations,
        delta: run.delta,
        converged: run.converged,
    }
}

fn compare_ranked(a: &RankedNode, b: &RankedNode) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.label.cmp(&b.label))
}

/// Labels `label` points to, sorted.
#[must_use]
pub fn get_dependencies(graph: &ImportGraph, label: &str) -> Vec<String> {
    neighbor_labels(graph, label, Direction::Outgoing)
}

/// Labels pointing to `label`, sorted.
#[must_use]
pub fn get_dependents(graph: &ImportGraph, label: &str) -> Vec<String> {
    neighbor_labels(graph, label, Direction::Incoming)
}

fn neighbor_labels(graph: &ImportGraph, label: &str, direction: Direction) -> Vec<String> {
    let Some(id) = graph.id(label) else {
        return Vec::new();
    };
    let mut out: Vec<String> = graph
        .graph
        .neighbors_directed(id, direction)
        .filter_map(|n| graph.label(n).map(str::to_string))
        .collect();
    out.sort();
    out.dedup();
    out
}
