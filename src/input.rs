// src/input.rs
//! Edge-list input.
//!
//! One edge per line, whitespace separated:
//! - `importer imported` (the unit is the importer), or
//! - `unit importer imported`.
//!
//! Blank lines and lines starting with `#` are ignored.

use std::fs;
use std::io::Read;
use std::path::Path;

use regex::Regex;

use crate::error::{PkgRankError, Result};
use crate::graph::UnitManifest;

/// Removes a trailing `@version` from unit identifiers.
#[derive(Debug, Clone)]
pub struct VersionStripper {
    suffix: Regex,
}

impl VersionStripper {
    /// # Errors
    /// Returns error if the suffix pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            suffix: Regex::new(r"(@\w+)$")?,
        })
    }

    #[must_use]
    pub fn strip<'a>(&self, unit: &'a str) -> std::borrow::Cow<'a, str> {
        self.suffix.replace(unit, "")
    }
}

/// Parses edge-list text into a manifest.
///
/// # Errors
/// Returns `InvalidInput` naming the first malformed line.
pub fn parse(text: &str, stripper: Option<&VersionStripper>) -> Result<UnitManifest> {
    let mut manifest = UnitManifest::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<String> = line
            .split_whitespace()
            .map(|f| normalize(f, stripper))
            .collect();
        match fields.as_slice() {
            [importer, imported] => manifest.add_edge(importer, importer, imported),
            [unit, importer, imported] => manifest.add_edge(unit, importer, imported),
            _ => {
                return Err(PkgRankError::InvalidInput {
                    line: index + 1,
                    reason: format!("expected 2 or 3 fields, found {}", fields.len()),
                })
            }
        }
    }
    Ok(manifest)
}

/// Reads edge-list text from `path`, or stdin when `path` is `-`.
///
/// # Errors
/// Returns `Io` if the source cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| PkgRankError::Io {
                source,
                path: path.to_path_buf(),
            })?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|source| PkgRankError::Io {
        source,
        path: path.to_path_buf(),
    })
}

fn normalize(field: &str, stripper: Option<&VersionStripper>) -> String {
    match stripper {
        Some(s) => s.strip(field).into_owned(),
        None => field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_columns() {
        let text = "# header\na b\n\na c\nb c\n";
        let m = parse(text, None).unwrap();
        assert_eq!(m.imports("a"), &["b".to_string(), "c".to_string()]);
        assert_eq!(m.imports("b"), &["c".to_string()]);
        assert!(m.contains("c"));
        assert!(m.imports("c").is_empty());
    }

    #[test]
    fn test_three_columns() {
        let m = parse("unit x y\n", None).unwrap();
        assert_eq!(m.local_edges("unit"), &[("x".to_string(), "y".to_string())]);
        assert_eq!(m.imports("unit"), &["y".to_string()]);
    }

    #[test]
    fn test_bad_line() {
        let err = parse("a b\nonly\n", None).unwrap_err();
        assert!(matches!(err, PkgRankError::InvalidInput { line: 2, .. }));
    }

    #[test]
    fn test_version_stripping() {
        let s = VersionStripper::new().unwrap();
        assert_eq!(s.strip("github.com/x/y@latest"), "github.com/x/y");
        assert_eq!(s.strip("github.com/x/y"), "github.com/x/y");
        let m = parse("a@v1 b@v2\n", Some(&s)).unwrap();
        assert_eq!(m.imports("a"), &["b".to_string()]);
    }
}
