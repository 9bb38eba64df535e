use serde::{Deserialize, Serialize};

use crate::graph::rank::pagerank::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::graph::rank::PageRankParams;

/// Contents of `pkgrank.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_measure")]
    pub measure: String,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            measure: default_measure(),
        }
    }
}

impl RankConfig {
    #[must_use]
    pub fn params(&self) -> PageRankParams {
        PageRankParams {
            damping: self.damping,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Accumulate independent units of a wave on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Drop a trailing `@version` from unit identifiers.
    #[serde(default = "default_true")]
    pub strip_versions: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            strip_versions: default_true(),
        }
    }
}

const fn default_true() -> bool { true }
const fn default_damping() -> f64 { DEFAULT_DAMPING }
const fn default_tolerance() -> f64 { DEFAULT_TOLERANCE }
const fn default_max_iterations() -> usize { DEFAULT_MAX_ITERATIONS }
fn default_measure() -> String { "pagerank".to_string() }
