// src/graph/key.rs
//! Identity types for nodes and edges.

use std::fmt;
use std::str::FromStr;

use crate::error::PkgRankError;

/// Identifier of a compilation unit or finer-grained symbol (e.g. an import path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeKey {
    pub id: String,
}

impl NodeKey {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for NodeKey {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Per-unit attributes attached to a node. Empty for now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeData {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub key: NodeKey,
    pub data: NodeData,
}

impl Node {
    #[must_use]
    pub fn new(key: NodeKey) -> Self {
        Self {
            key,
            data: NodeData::default(),
        }
    }
}

/// Identity of an edge: the container whose local analysis produced it,
/// plus an id that is unique within that container.
///
/// Two edges with equal keys are the same edge for merge purposes,
/// whichever fragment contributed them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    container: String,
    id: String,
}

impl EdgeKey {
    #[must_use]
    pub fn new(container: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            id: id.into(),
        }
    }

    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.container, self.id)
    }
}

impl FromStr for EdgeKey {
    type Err = PkgRankError;

    /// Parses `container:id`, splitting on the first `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((container, id)) = s.split_once(':') else {
            return Err(PkgRankError::InvalidEdgeKey(s.to_string()));
        };
        Ok(Self::new(container, id))
    }
}
