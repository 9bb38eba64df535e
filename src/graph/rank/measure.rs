// src/graph/rank/measure.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PkgRankError;

/// A method of measuring node centrality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CentralityMeasure {
    #[default]
    PageRank,
    /// Number of distinct nodes pointing at a node.
    Indegree,
    /// Number of distinct nodes a node points at.
    Outdegree,
}

impl FromStr for CentralityMeasure {
    type Err = PkgRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pagerank" => Ok(Self::PageRank),
            "indegree" => Ok(Self::Indegree),
            "outdegree" => Ok(Self::Outdegree),
            other => Err(PkgRankError::UnsupportedCentrality(other.to_string())),
        }
    }
}

impl fmt::Display for CentralityMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageRank => f.write_str("pagerank"),
            Self::Indegree => f.write_str("indegree"),
            Self::Outdegree => f.write_str("outdegree"),
        }
    }
}

/// Which way edges point when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Forward edges: foundational units that others resolve down to rank
    /// highest.
    #[default]
    Substrate,
    /// Reversed edges: units that depend on many others rank highest.
    Consumer,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substrate => f.write_str("substrate"),
            Self::Consumer => f.write_str("consumer"),
        }
    }
}
