// src/graph/rank/pagerank.rs
//! Weighted `PageRank` with a convergence tolerance.
//!
//! Each node splits its rank over its out-edges in proportion to edge
//! weight. Rank held by nodes without out-edges is spread uniformly.
//! Negative or non-finite weights count as zero.

use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_TOLERANCE: f64 = 0.0001;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankParams {
    pub damping: f64,
    /// Iteration stops once the L1 change between rounds drops below this.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for PageRankParams {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Scores indexed by node index, plus convergence details.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankRun {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub delta: f64,
    pub converged: bool,
}

impl PageRankRun {
    /// A run for a measure computed exactly, without iteration.
    #[must_use]
    pub fn settled(scores: Vec<f64>) -> Self {
        Self {
            scores,
            iterations: 0,
            delta: 0.0,
            converged: true,
        }
    }
}

/// Computes `PageRank` over `graph`. An empty graph yields an empty, converged
/// run.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &DiGraph<(), f64>, params: PageRankParams) -> PageRankRun {
    let count = graph.node_count();
    if count == 0 {
        return PageRankRun::settled(Vec::new());
    }

    let n = count as f64;
    let out_weight = outgoing_weights(graph);
    let mut ranks = vec![1.0 / n; count];
    let mut delta = f64::INFINITY;
    let mut iterations = 0;

    while iterations < params.max_iterations {
        let next = iterate_once(graph, &ranks, &out_weight, params.damping, n);
        delta = l1_distance(&ranks, &next);
        ranks = next;
        iterations += 1;
        if delta < params.tolerance {
            break;
        }
    }

    PageRankRun {
        scores: ranks,
        iterations,
        delta,
        converged: delta < params.tolerance,
    }
}

fn outgoing_weights(graph: &DiGraph<(), f64>) -> Vec<f64> {
    let mut out = vec![0.0; graph.node_count()];
    for edge in graph.edge_references() {
        out[edge.source().index()] += usable_weight(*edge.weight());
    }
    out
}

fn usable_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

fn iterate_once(
    graph: &DiGraph<(), f64>,
    ranks: &[f64],
    out_weight: &[f64],
    damping: f64,
    n: f64,
) -> Vec<f64> {
    let dangling: f64 = ranks
        .iter()
        .zip(out_weight)
        .filter(|(_, w)| **w <= 0.0)
        .map(|(r, _)| r)
        .sum();
    let base = (1.0 - damping) / n + damping * dangling / n;
    let mut next = vec![base; ranks.len()];

    for edge in graph.edge_references() {
        let (src, dst) = (edge.source().index(), edge.target().index());
        let total = out_weight[src];
        if total > 0.0 {
            next[dst] += damping * ranks[src] * (usable_weight(*edge.weight()) / total);
        }
    }

    normalize(&mut next);
    next
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

fn normalize(ranks: &mut [f64]) {
    let total: f64 = ranks.iter().sum();
    if total > 0.0 {
        for rank in ranks.iter_mut() {
            *rank /= total;
        }
    }
}
