// src/graph/rank/mod.rs
pub mod builder;
pub mod degree;
pub mod graph;
pub mod measure;
pub mod pagerank;
pub mod queries;

pub use graph::ImportGraph;
pub use measure::{CentralityMeasure, Orientation};
pub use pagerank::{PageRankParams, PageRankRun};
pub use queries::{RankedNode, Ranking};

use petgraph::Direction;

use crate::graph::fragment::Graph;

/// Orchestrates graph conversion and ranking.
pub struct RankEngine;

impl RankEngine {
    /// Ranks the nodes of an accumulated fragment.
    #[must_use]
    pub fn rank(
        fragment: &Graph,
        orientation: Orientation,
        measure: CentralityMeasure,
        params: PageRankParams,
    ) -> Ranking {
        let graph = builder::from_fragment(fragment);
        match orientation {
            Orientation::Substrate => graph.centrality(measure, params),
            Orientation::Consumer => graph.reversed().centrality(measure, params),
        }
    }
}

impl ImportGraph {
    /// Scores every node and returns them most important first. `params`
    /// only affects `PageRank`.
    #[must_use]
    pub fn centrality(&self, measure: CentralityMeasure, params: PageRankParams) -> Ranking {
        let run = match measure {
            CentralityMeasure::PageRank => pagerank::compute(&self.graph, params),
            CentralityMeasure::Indegree => {
                PageRankRun::settled(degree::compute(&self.graph, Direction::Incoming))
            }
            CentralityMeasure::Outdegree => {
                PageRankRun::settled(degree::compute(&self.graph, Direction::Outgoing))
            }
        };
        queries::get_ranking(self, measure, &run)
    }

    /// Labels this node points to.
    #[must_use]
    pub fn dependencies(&self, label: &str) -> Vec<String> {
        queries::get_dependencies(self, label)
    }

    /// Labels pointing to this node.
    #[must_use]
    pub fn dependents(&self, label: &str) -> Vec<String> {
        queries::get_dependents(self, label)
    }
}
