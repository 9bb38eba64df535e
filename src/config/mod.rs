// src/config/mod.rs
pub mod types;

pub use self::types::{Config, RankConfig, ScheduleConfig};

use std::fs;
use std::path::Path;

use crate::error::{PkgRankError, Result};
use crate::graph::rank::CentralityMeasure;

pub const CONFIG_FILE: &str = "pkgrank.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `pkgrank.toml` from the current directory, falling back to
    /// defaults when it does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read, parsed, or
    /// validated.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Same as [`Config::load`] for an explicit path.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read, parsed, or
    /// validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path).map_err(|source| PkgRankError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse_toml(&content)
    }

    /// Parses and validates TOML configuration text.
    ///
    /// # Errors
    /// Returns `Toml` for malformed text and `InvalidConfig` for out-of-range
    /// values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` or `UnsupportedCentrality` on the first bad
    /// value.
    pub fn validate(&self) -> Result<()> {
        let rank = &self.rank;
        if !(rank.damping > 0.0 && rank.damping < 1.0) {
            return Err(PkgRankError::InvalidConfig(format!(
                "damping must be in (0, 1), got {}",
                rank.damping
            )));
        }
        if rank.tolerance.is_nan() || rank.tolerance <= 0.0 {
            return Err(PkgRankError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                rank.tolerance
            )));
        }
        if rank.max_iterations == 0 {
            return Err(PkgRankError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        self.measure()?;
        Ok(())
    }

    /// The configured centrality measure.
    ///
    /// # Errors
    /// Returns `UnsupportedCentrality` for unknown names.
    pub fn measure(&self) -> Result<CentralityMeasure> {
        self.rank.measure.parse()
    }
}
