// src/graph/registry.rs
//! Write-once store of finalized fragments, keyed by unit.
//!
//! Published fragments are frozen behind an `Arc` and shared read-only by
//! every dependent. Only publication takes the write lock.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::fragment::Graph;
use crate::error::{PkgRankError, Result};

/// Lookup of finalized dependency fragments.
pub trait FragmentLookup {
    /// Returns the published fragment for `unit`, if any.
    fn fragment(&self, unit: &str) -> Option<Arc<Graph>>;
}

#[derive(Debug, Default)]
pub struct FragmentRegistry {
    fragments: RwLock<HashMap<String, Arc<Graph>>>,
}

impl FragmentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Freezes `graph` and makes it visible under `unit`.
    ///
    /// # Errors
    /// Returns `AlreadyPublished` if `unit` already has a fragment.
    pub fn publish(&self, unit: &str, graph: Graph) -> Result<Arc<Graph>> {
        let mut fragments = self
            .fragments
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if fragments.contains_key(unit) {
            return Err(PkgRankError::AlreadyPublished {
                unit: unit.to_string(),
            });
        }
        let frozen = Arc::new(graph);
        fragments.insert(unit.to_string(), Arc::clone(&frozen));
        Ok(frozen)
    }

    #[must_use]
    pub fn contains(&self, unit: &str) -> bool {
        self.fragments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(unit)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FragmentLookup for FragmentRegistry {
    fn fragment(&self, unit: &str) -> Option<Arc<Graph>> {
        self.fragments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(unit)
            .cloned()
    }
}

impl FragmentLookup for HashMap<String, Arc<Graph>> {
    fn fragment(&self, unit: &str) -> Option<Arc<Graph>> {
        self.get(unit).cloned()
    }
}
