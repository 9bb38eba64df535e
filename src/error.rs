// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::graph::{EdgeKey, EdgeKind};

#[derive(Debug, Error)]
pub enum PkgRankError {
    #[error("cannot add edges of different kinds under key {key}: existing={existing}, incoming={incoming}")]
    EdgeKindMismatch {
        key: EdgeKey,
        existing: EdgeKind,
        incoming: EdgeKind,
    },

    #[error("no merge policy for {kind} edges (key {key})")]
    NoMergePolicy { key: EdgeKey, kind: EdgeKind },

    #[error("failed to import fragment of dependency {dependency} while processing {unit}")]
    MissingFragment { unit: String, dependency: String },

    #[error("fragment for {unit} was already published")]
    AlreadyPublished { unit: String },

    #[error("dependency cycle among units: {}", units.join(", "))]
    DependencyCycle { units: Vec<String> },

    #[error("root unit {0} does not appear in the input")]
    UnknownRoot(String),

    #[error("invalid edge key: {0:?}")]
    InvalidEdgeKey(String),

    #[error("invalid input on line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    #[error("unsupported centrality measure: {0}")]
    UnsupportedCentrality(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PkgRankError {
    /// True for broken invariants in the producer or driver, as opposed to
    /// bad input or environment failures.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::EdgeKindMismatch { .. }
                | Self::NoMergePolicy { .. }
                | Self::MissingFragment { .. }
                | Self::AlreadyPublished { .. }
        )
    }

    /// True for malformed user input (edge lists, keys, config values).
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidEdgeKey(_)
                | Self::InvalidInput { .. }
                | Self::UnsupportedCentrality(_)
                | Self::InvalidConfig(_)
                | Self::UnknownRoot(_)
                | Self::DependencyCycle { .. }
                | Self::Toml(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PkgRankError>;

// Allow `?` on std::io::Error by converting to PkgRankError::Io with unknown path.
impl From<std::io::Error> for PkgRankError {
    fn from(source: std::io::Error) -> Self {
        PkgRankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
