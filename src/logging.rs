// src/logging.rs
//! Process-wide logger setup.
//!
//! `LOG_LEVEL` selects the level (default `off`). `LOG_FORMAT` selects
//! `console` (default) or `json` (one object per line).

use std::io::Write;

use env_logger::{Builder, Env};

use crate::error::{PkgRankError, Result};

pub const LEVEL_ENV: &str = "LOG_LEVEL";
pub const FORMAT_ENV: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Console,
    Json,
}

impl LogFormat {
    /// # Errors
    /// Returns `InvalidConfig` for anything but `console` or `json`.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.eq_ignore_ascii_case("console") {
            Ok(Self::Console)
        } else if raw.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(PkgRankError::InvalidConfig(format!("invalid log format {raw:?}")))
        }
    }
}

/// Installs the global logger. `verbose` raises the default level to
/// `debug` when `LOG_LEVEL` is unset.
///
/// # Errors
/// Returns `InvalidConfig` if `LOG_FORMAT` is unrecognized.
pub fn init(verbose: bool) -> Result<()> {
    let format = match std::env::var(FORMAT_ENV) {
        Ok(raw) if !raw.is_empty() => LogFormat::parse(&raw)?,
        _ => LogFormat::default(),
    };
    let default_level = if verbose { "debug" } else { "off" };
    let mut builder = Builder::from_env(Env::new().filter_or(LEVEL_ENV, default_level));
    if format == LogFormat::Json {
        builder.format(|buf, record| {
            let line = serde_json::json!({
                "level": record.level().as_str().to_lowercase(),
                "target": record.target(),
                "message": record.args().to_string(),
            });
            writeln!(buf, "{line}")
        });
    }
    if builder.try_init().is_err() {
        log::debug!("logger already installed, keeping it");
    }
    Ok(())
}
