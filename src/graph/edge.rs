// src/graph/edge.rs
//! Edge variants and their structural validation.
//!
//! Only [`Edge::Directed`] flows through accumulation and ranking. The
//! undirected and hyperedge variants are extension points.

use std::fmt;

use thiserror::Error;

use super::key::{EdgeKey, NodeKey};

pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Discriminant of an [`Edge`], used to detect kind confusion under one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Directed,
    Undirected,
    Hyper,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
            Self::Hyper => "hyper",
        };
        f.write_str(name)
    }
}

/// Structural defects of a single edge. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EdgeError {
    #[error("directed edge has an empty source")]
    EmptySource,
    #[error("directed edge has an empty target")]
    EmptyTarget,
    #[error("undirected edge has an empty left endpoint")]
    EmptyLeft,
    #[error("undirected edge has an empty right endpoint")]
    EmptyRight,
    #[error("hyperedge must have at least one node")]
    EmptyHyperedge,
    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectedEdge {
    pub key: EdgeKey,
    pub weight: f64,
    pub src: NodeKey,
    pub dst: NodeKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UndirectedEdge {
    pub key: EdgeKey,
    pub weight: f64,
    pub left: NodeKey,
    pub right: NodeKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HyperEdge {
    pub key: EdgeKey,
    pub weight: f64,
    /// Sorted by id.
    pub members: Vec<NodeKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Edge {
    Directed(DirectedEdge),
    Undirected(UndirectedEdge),
    Hyper(HyperEdge),
}

impl Edge {
    /// A directed edge `src -> dst` produced by `container`, with weight 1.
    #[must_use]
    pub fn directed(container: &str, src: &str, dst: &str) -> Self {
        Self::Directed(DirectedEdge {
            key: EdgeKey::new(container, format!("{src}->{dst}")),
            weight: DEFAULT_WEIGHT,
            src: NodeKey::new(src),
            dst: NodeKey::new(dst),
        })
    }

    #[must_use]
    pub fn undirected(container: &str, left: &str, right: &str) -> Self {
        Self::Undirected(UndirectedEdge {
            key: EdgeKey::new(container, format!("{left}~{right}")),
            weight: DEFAULT_WEIGHT,
            left: NodeKey::new(left),
            right: NodeKey::new(right),
        })
    }

    /// A hyperedge over `ids`. Members are sorted so the key does not
    /// depend on argument order.
    #[must_use]
    pub fn hyper(container: &str, ids: &[&str]) -> Self {
        let mut sorted: Vec<&str> = ids.to_vec();
        sorted.sort_unstable();
        Self::Hyper(HyperEdge {
            key: EdgeKey::new(container, sorted.join(",")),
            weight: DEFAULT_WEIGHT,
            members: sorted.into_iter().map(NodeKey::new).collect(),
        })
    }

    /// Returns the same edge with its weight replaced.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        *self.weight_mut() = weight;
        self
    }

    #[must_use]
    pub fn key(&self) -> &EdgeKey {
        match self {
            Self::Directed(e) => &e.key,
            Self::Undirected(e) => &e.key,
            Self::Hyper(e) => &e.key,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EdgeKind {
        match self {
            Self::Directed(_) => EdgeKind::Directed,
            Self::Undirected(_) => EdgeKind::Undirected,
            Self::Hyper(_) => EdgeKind::Hyper,
        }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            Self::Directed(e) => e.weight,
            Self::Undirected(e) => e.weight,
            Self::Hyper(e) => e.weight,
        }
    }

    pub fn weight_mut(&mut self) -> &mut f64 {
        match self {
            Self::Directed(e) => &mut e.weight,
            Self::Undirected(e) => &mut e.weight,
            Self::Hyper(e) => &mut e.weight,
        }
    }

    /// The nodes this edge connects, in the variant's natural order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&NodeKey> {
        match self {
            Self::Directed(e) => vec![&e.src, &e.dst],
            Self::Undirected(e) => vec![&e.left, &e.right],
            Self::Hyper(e) => e.members.iter().collect(),
        }
    }

    /// Checks structural invariants.
    ///
    /// # Errors
    /// Returns the first defect found.
    pub fn validate(&self) -> Result<(), EdgeError> {
        match self {
            Self::Directed(e) if e.src.is_empty() => Err(EdgeError::EmptySource),
            Self::Directed(e) if e.dst.is_empty() => Err(EdgeError::EmptyTarget),
            Self::Undirected(e) if e.left.is_empty() => Err(EdgeError::EmptyLeft),
            Self::Undirected(e) if e.right.is_empty() => Err(EdgeError::EmptyRight),
            Self::Hyper(e) if e.members.is_empty() => Err(EdgeError::EmptyHyperedge),
            edge if !edge.weight().is_finite() || edge.weight() < 0.0 => {
                Err(EdgeError::InvalidWeight(edge.weight()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_key_and_nodes() {
        let edge = Edge::directed("a", "a", "b");
        assert_eq!(edge.key().to_string(), "a:a->b");
        assert_eq!(edge.kind(), EdgeKind::Directed);
        assert!((edge.weight() - 1.0).abs() < f64::EPSILON);
        let nodes: Vec<&str> = edge.nodes().iter().map(|n| n.as_str()).collect();
        assert_eq!(nodes, vec!["a", "b"]);
    }

    #[test]
    fn test_hyper_key_is_order_independent() {
        let one = Edge::hyper("c", &["z", "a", "m"]);
        let two = Edge::hyper("c", &["m", "z", "a"]);
        assert_eq!(one.key(), two.key());
        assert_eq!(one.key().id(), "a,m,z");
    }

    #[test]
    fn test_validation() {
        assert_eq!(Edge::directed("c", "", "b").validate(), Err(EdgeError::EmptySource));
        assert_eq!(Edge::directed("c", "a", "").validate(), Err(EdgeError::EmptyTarget));
        assert_eq!(Edge::undirected("c", "a", "").validate(), Err(EdgeError::EmptyRight));
        assert_eq!(Edge::hyper("c", &[]).validate(), Err(EdgeError::EmptyHyperedge));
        assert_eq!(Edge::directed("c", "a", "b").validate(), Ok(()));
        assert_eq!(Edge::undirected("c", "a", "b").key().id(), "a~b");
    }

    #[test]
    fn test_weight_validation() {
        let negative = Edge::directed("c", "a", "b").with_weight(-3.0);
        assert_eq!(negative.validate(), Err(EdgeError::InvalidWeight(-3.0)));
        let nan = Edge::undirected("c", "a", "b").with_weight(f64::NAN);
        assert!(matches!(nan.validate(), Err(EdgeError::InvalidWeight(w)) if w.is_nan()));
        let infinite = Edge::hyper("c", &["a"]).with_weight(f64::INFINITY);
        assert!(infinite.validate().is_err());
        // Structural defects are reported first.
        let both = Edge::directed("c", "", "b").with_weight(-1.0);
        assert_eq!(both.validate(), Err(EdgeError::EmptySource));
        assert_eq!(Edge::directed("c", "a", "b").with_weight(0.0).validate(), Ok(()));
    }
}
