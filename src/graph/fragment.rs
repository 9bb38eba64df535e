// src/graph/fragment.rs
//! The mergeable multi-container graph.
//!
//! A [`Graph`] is a fragment of the whole-program dependency graph. It
//! remembers which containers (compilation units) have already been folded
//! into it, so that merging the fragment of a shared transitive dependency a
//! second time contributes nothing.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::edge::{Edge, EdgeError};
use super::key::{EdgeKey, Node, NodeKey};
use crate::error::{PkgRankError, Result};

/// Merges `incoming` into `prev` in place. Only called when an edge with the
/// same key and kind already exists.
pub type MergeFn = fn(prev: &mut Edge, incoming: &Edge) -> Result<()>;

#[derive(Clone, Copy)]
pub struct MergeOptions {
    pub merge: MergeFn,
}

impl fmt::Debug for MergeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeOptions").finish_non_exhaustive()
    }
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            merge: accumulate_weights,
        }
    }
}

/// Default merge policy: directed weights add up (session-count accumulation).
///
/// # Errors
/// Returns `NoMergePolicy` for any non-directed pair.
pub fn accumulate_weights(prev: &mut Edge, incoming: &Edge) -> Result<()> {
    match (prev, incoming) {
        (Edge::Directed(prev), Edge::Directed(incoming)) => {
            prev.weight += incoming.weight;
            Ok(())
        }
        (prev, _) => Err(PkgRankError::NoMergePolicy {
            key: prev.key().clone(),
            kind: prev.kind(),
        }),
    }
}

/// Result of a single [`Graph::add_edge`].
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion {
    /// An edge with the same key was already present and got merged.
    pub existed: bool,
    /// Structural defect of the inserted edge. The edge is stored anyway.
    pub invalid: Option<EdgeError>,
}

/// Result of folding one fragment into another with [`Graph::add`].
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    Merged {
        /// Edges handed to `add_edge` (new or merged).
        inserted: usize,
        /// Edges skipped because their container was already present.
        overlap: usize,
        invalid: Vec<(EdgeKey, EdgeError)>,
    },
    /// Every container of the other fragment was already present. Nothing
    /// was inserted.
    Redundant { skipped: usize },
}

impl MergeOutcome {
    /// Number of edges that were not inserted because they were already
    /// represented transitively.
    #[must_use]
    pub fn overlap(&self) -> usize {
        match self {
            Self::Merged { overlap, .. } => *overlap,
            Self::Redundant { skipped } => *skipped,
        }
    }

    #[must_use]
    pub fn is_redundant(&self) -> bool {
        matches!(self, Self::Redundant { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// The container this graph primarily represents.
    pub container: String,
    /// Containers whose local edges are already represented in `edges`.
    /// Empty for a bare fragment.
    pub added_containers: HashSet<String>,
    pub nodes: HashMap<NodeKey, Node>,
    pub edges: HashMap<EdgeKey, Edge>,
}

impl Graph {
    /// A bare fragment: no added containers, always merged unconditionally.
    #[must_use]
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            ..Self::default()
        }
    }

    /// A fragment seeded for `unit`, with the unit itself as its only added
    /// container and node.
    #[must_use]
    pub fn for_unit(unit: &str) -> Self {
        let mut graph = Self::new(unit);
        graph.added_containers.insert(unit.to_string());
        graph.add_node(NodeKey::new(unit));
        graph
    }

    /// Number of nodes.
    #[must_use]
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.added_containers.is_empty()
    }

    #[must_use]
    pub fn edge(&self, key: &EdgeKey) -> Option<&Edge> {
        self.edges.get(key)
    }

    /// Registers a node, isolated or not. Returns true if it was new.
    pub fn add_node(&mut self, key: NodeKey) -> bool {
        if self.nodes.contains_key(&key) {
            return false;
        }
        self.nodes.insert(key.clone(), Node::new(key));
        true
    }

    /// Inserts `edge` with the default weight-accumulating merge policy.
    ///
    /// # Errors
    /// See [`Graph::add_edge_with`].
    pub fn add_edge(&mut self, edge: Edge) -> Result<Insertion> {
        self.add_edge_with(edge, MergeOptions::default())
    }

    /// Inserts `edge`, merging it into an existing edge with the same key.
    ///
    /// Structurally invalid edges are still inserted; the defect is returned
    /// in [`Insertion::invalid`].
    ///
    /// # Errors
    /// Returns `EdgeKindMismatch` if the key is already taken by an edge of a
    /// different kind, or whatever the merge function reports.
    pub fn add_edge_with(&mut self, edge: Edge, opts: MergeOptions) -> Result<Insertion> {
        let invalid = edge.validate().err();
        let existed = match self.edges.get_mut(edge.key()) {
            Some(prev) => {
                if prev.kind() != edge.kind() {
                    return Err(PkgRankError::EdgeKindMismatch {
                        key: edge.key().clone(),
                        existing: prev.kind(),
                        incoming: edge.kind(),
                    });
                }
                (opts.merge)(prev, &edge)?;
                true
            }
            None => false,
        };
        for node in edge.nodes() {
            if !self.nodes.contains_key(node) {
                self.add_node(node.clone());
            }
        }
        if !existed {
            self.edges.insert(edge.key().clone(), edge);
        }
        Ok(Insertion { existed, invalid })
    }

    /// Folds `other` into this graph with the default merge policy.
    ///
    /// # Errors
    /// See [`Graph::add_with`].
    pub fn add(&mut self, other: &Graph) -> Result<MergeOutcome> {
        self.add_with(other, MergeOptions::default())
    }

    /// Folds `other` into this graph without re-inserting edges of
    /// containers this graph already holds.
    ///
    /// A bare `other` is merged unconditionally. If every container of
    /// `other` is already present the merge is skipped entirely and
    /// [`MergeOutcome::Redundant`] is returned.
    ///
    /// # Errors
    /// Propagates fatal errors from [`Graph::add_edge_with`].
    pub fn add_with(&mut self, other: &Graph, opts: MergeOptions) -> Result<MergeOutcome> {
        let keep = self.claim_containers(other);
        if keep.is_empty() && !other.is_bare() {
            return Ok(MergeOutcome::Redundant {
                skipped: other.size(),
            });
        }

        let mut inserted = 0;
        let mut overlap = 0;
        let mut invalid = Vec::new();
        for edge in other.edges.values() {
            if !other.is_bare() && !keep.contains(edge.key().container()) {
                overlap += 1;
                continue;
            }
            let insertion = self.add_edge_with(edge.clone(), opts)?;
            if let Some(defect) = insertion.invalid {
                invalid.push((edge.key().clone(), defect));
            }
            inserted += 1;
        }
        for key in other.nodes.keys() {
            self.add_node(key.clone());
        }

        Ok(MergeOutcome::Merged {
            inserted,
            overlap,
            invalid,
        })
    }

    /// Marks the containers of `other` that are new to this graph as added
    /// and returns them.
    fn claim_containers(&mut self, other: &Graph) -> HashSet<String> {
        let mut keep = HashSet::new();
        for container in &other.added_containers {
            if self.added_containers.insert(container.clone()) {
                keep.insert(container.clone());
            }
        }
        keep
    }

    /// Directed edges as `(src, dst, weight)`, sorted by source then target.
    #[must_use]
    pub fn directed_edges(&self) -> Vec<(&NodeKey, &NodeKey, f64)> {
        let mut out: Vec<_> = self
            .edges
            .values()
            .filter_map(|edge| match edge {
                Edge::Directed(e) => Some((&e.src, &e.dst, e.weight)),
                _ => None,
            })
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(b.1)));
        out
    }
}

impl fmt::Display for Graph {
    /// One `key: weight` line per edge, heaviest first, then by key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<(String, f64)> = self
            .edges
            .values()
            .map(|edge| (edge.to_string(), edge.weight()))
            .collect();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        for (name, weight) in sorted {
            writeln!(f, "{name}: {weight}")?;
        }
        Ok(())
    }
}
