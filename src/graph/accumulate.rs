// src/graph/accumulate.rs
//! Dependency-order fragment accumulation.
//!
//! Each unit is visited once, after all of its direct imports have published
//! their fragments. Its own fragment starts from its local edges and folds in
//! every import's fragment; containers already reachable through an earlier
//! import are skipped, so a shared dependency contributes its edges once no
//! matter how many paths lead to it.

use std::sync::Arc;

use log::{debug, info, trace};

use super::edge::{Edge, EdgeError};
use super::fragment::{Graph, MergeOutcome};
use super::key::EdgeKey;
use super::registry::{FragmentLookup, FragmentRegistry};
use crate::error::{PkgRankError, Result};

/// A raw local edge `(importer, imported)` reported for one unit.
pub type LocalEdge = (String, String);

/// Diagnostics for one accumulated unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitReport {
    pub unit: String,
    pub imports: usize,
    /// Edges skipped because their container was already folded in.
    pub overlap: usize,
    /// Imports whose whole fragment was already represented.
    pub redundant: usize,
    pub order: usize,
    pub size: usize,
    pub invalid: Vec<(EdgeKey, EdgeError)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnitOutcome {
    /// The unit already has a published fragment; nothing was done.
    AlreadyVisited,
    Published(UnitReport),
}

/// Builds the fragment for `unit` from its local edges and the published
/// fragments of its direct `imports`. Pure: publishes nothing.
///
/// # Errors
/// Returns `MissingFragment` if an import has no published fragment, and
/// propagates fatal merge errors.
pub fn build_fragment<L>(
    unit: &str,
    local_edges: &[LocalEdge],
    imports: &[String],
    lookup: &L,
) -> Result<(Graph, UnitReport)>
where
    L: FragmentLookup + ?Sized,
{
    let mut graph = Graph::for_unit(unit);
    let mut report = UnitReport {
        unit: unit.to_string(),
        imports: imports.len(),
        ..UnitReport::default()
    };

    for (importer, imported) in local_edges {
        let edge = Edge::directed(unit, importer, imported);
        let key = edge.key().clone();
        if let Some(defect) = graph.add_edge(edge)?.invalid {
            report.invalid.push((key, defect));
        }
    }

    for dep in imports {
        let Some(fragment) = lookup.fragment(dep) else {
            return Err(PkgRankError::MissingFragment {
                unit: unit.to_string(),
                dependency: dep.clone(),
            });
        };
        let outcome = graph.add(&fragment)?;
        trace!(
            "{unit}: merged {dep} (order {}, size {}, overlap {})",
            fragment.order(),
            fragment.size(),
            outcome.overlap()
        );
        if outcome.is_redundant() {
            report.redundant += 1;
        }
        report.overlap += outcome.overlap();
        if let MergeOutcome::Merged { invalid, .. } = outcome {
            report.invalid.extend(invalid);
        }
    }

    report.order = graph.order();
    report.size = graph.size();
    Ok((graph, report))
}

/// Drives [`build_fragment`] against a [`FragmentRegistry`] and recognizes
/// the root unit whose fragment is the whole-program graph.
#[derive(Debug)]
pub struct Accumulator {
    root: String,
    registry: FragmentRegistry,
}

impl Accumulator {
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            registry: FragmentRegistry::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn registry(&self) -> &FragmentRegistry {
        &self.registry
    }

    /// Processes one unit. Safe to call concurrently for units whose imports
    /// are all published; if two calls race on the same unit, the one that
    /// loses the publish reports [`UnitOutcome::AlreadyVisited`].
    ///
    /// # Errors
    /// See [`build_fragment`].
    pub fn process(
        &self,
        unit: &str,
        local_edges: &[LocalEdge],
        imports: &[String],
    ) -> Result<UnitOutcome> {
        if self.registry.contains(unit) {
            debug!("{unit}: already visited");
            return Ok(UnitOutcome::AlreadyVisited);
        }

        let (graph, report) = build_fragment(unit, local_edges, imports, &self.registry)?;
        for (key, defect) in &report.invalid {
            debug!("{unit}: kept invalid edge {key}: {defect}");
        }
        if report.redundant > 0 {
            debug!("{unit}: {} redundant import fragment(s)", report.redundant);
        }
        match self.registry.publish(unit, graph) {
            Ok(_) => {}
            Err(PkgRankError::AlreadyPublished { .. }) => {
                debug!("{unit}: published concurrently, discarding duplicate");
                return Ok(UnitOutcome::AlreadyVisited);
            }
            Err(err) => return Err(err),
        }
        info!(
            "{unit}: published fragment (order {}, size {}, deps {}, overlap {})",
            report.order, report.size, report.imports, report.overlap
        );
        if unit == self.root {
            info!("{unit}: root fragment complete");
        }
        Ok(UnitOutcome::Published(report))
    }

    /// The root's fragment, once the root has been processed.
    #[must_use]
    pub fn whole_program(&self) -> Option<Arc<Graph>> {
        self.registry.fragment(&self.root)
    }
}
