// src/graph/schedule.rs
//! Dependency-ordered scheduling of unit accumulation.
//!
//! Units are grouped into waves: every unit in a wave depends only on units
//! in earlier waves. Waves run one after another; the units inside a wave
//! are independent and may run in parallel.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use super::accumulate::{Accumulator, LocalEdge, UnitOutcome, UnitReport};
use super::fragment::Graph;
use crate::error::{PkgRankError, Result};

#[derive(Debug, Clone, Default)]
struct UnitEntry {
    local_edges: Vec<LocalEdge>,
    imports: Vec<String>,
}

/// Per-unit raw edges and direct imports, as reported by the host toolchain.
#[derive(Debug, Clone, Default)]
pub struct UnitManifest {
    units: BTreeMap<String, UnitEntry>,
}

impl UnitManifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `unit` with no edges, unless already declared.
    pub fn declare(&mut self, unit: &str) {
        self.units.entry(unit.to_string()).or_default();
    }

    /// Records a raw edge `importer -> imported` reported by `unit`.
    /// `imported` becomes a direct import of `unit` and a declared unit.
    pub fn add_edge(&mut self, unit: &str, importer: &str, imported: &str) {
        let entry = self.units.entry(unit.to_string()).or_default();
        entry
            .local_edges
            .push((importer.to_string(), imported.to_string()));
        if !entry.imports.iter().any(|i| i == imported) {
            entry.imports.push(imported.to_string());
        }
        self.declare(imported);
    }

    #[must_use]
    pub fn contains(&self, unit: &str) -> bool {
        self.units.contains_key(unit)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Direct imports of `unit`, in first-seen order.
    #[must_use]
    pub fn imports(&self, unit: &str) -> &[String] {
        self.units.get(unit).map_or(&[], |e| e.imports.as_slice())
    }

    #[must_use]
    pub fn local_edges(&self, unit: &str) -> &[LocalEdge] {
        self.units.get(unit).map_or(&[], |e| e.local_edges.as_slice())
    }

    /// Units transitively imported by `root`, including `root`.
    #[must_use]
    pub fn reachable_from(&self, root: &str) -> BTreeSet<String> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![root.to_string()];
        while let Some(unit) = stack.pop() {
            if !seen.insert(unit.clone()) {
                continue;
            }
            for dep in self.imports(&unit) {
                if !seen.contains(dep) {
                    stack.push(dep.clone());
                }
            }
        }
        seen
    }

    /// Splits the units reachable from `root` into dependency-ordered waves.
    /// Units inside a wave are sorted by name.
    ///
    /// # Errors
    /// Returns `UnknownRoot` if `root` is not declared and `DependencyCycle`
    /// naming the units that can never become ready.
    pub fn waves(&self, root: &str) -> Result<Vec<Vec<String>>> {
        if !self.contains(root) {
            return Err(PkgRankError::UnknownRoot(root.to_string()));
        }
        let reachable = self.reachable_from(root);
        let mut pending: HashMap<&str, usize> = HashMap::new();
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
        for unit in &reachable {
            let imports = self.imports(unit);
            pending.insert(unit.as_str(), imports.len());
            for dep in imports {
                dependents.entry(dep.as_str()).or_default().push(unit.as_str());
            }
        }

        let mut ready: Vec<&str> = pending
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(unit, _)| *unit)
            .collect();
        let mut waves = Vec::new();
        let mut scheduled = 0;
        while !ready.is_empty() {
            ready.sort_unstable();
            let mut next = Vec::new();
            for unit in &ready {
                for dependent in dependents.get(unit).map_or(&[][..], Vec::as_slice) {
                    if let Some(count) = pending.get_mut(dependent) {
                        *count -= 1;
                        if *count == 0 {
                            next.push(*dependent);
                        }
                    }
                }
            }
            scheduled += ready.len();
            waves.push(ready.iter().map(|u| (*u).to_string()).collect());
            ready = next;
        }

        if scheduled < reachable.len() {
            let mut units: Vec<String> = pending
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(unit, _)| unit.to_string())
                .collect();
            units.sort();
            return Err(PkgRankError::DependencyCycle { units });
        }
        Ok(waves)
    }
}

/// The whole-program graph plus per-unit diagnostics.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    pub graph: Arc<Graph>,
    pub reports: Vec<UnitReport>,
    pub waves: usize,
}

impl ScheduleRun {
    /// Sum of overlap counts over all processed units.
    #[must_use]
    pub fn total_overlap(&self) -> usize {
        self.reports.iter().map(|r| r.overlap).sum()
    }
}

/// Runs an [`Accumulator`] over a manifest in dependency order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    parallel: bool,
}

impl Scheduler {
    #[must_use]
    pub fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    /// Accumulates every unit reachable from `root` and returns the root's
    /// fragment.
    ///
    /// # Errors
    /// Scheduling errors from [`UnitManifest::waves`] and any fatal error a
    /// unit reports. No partial graph is returned on error.
    pub fn run(&self, manifest: &UnitManifest, root: &str) -> Result<ScheduleRun> {
        let waves = manifest.waves(root)?;
        info!(
            "scheduling {} unit(s) in {} wave(s) for {root}",
            waves.iter().map(Vec::len).sum::<usize>(),
            waves.len()
        );
        let accumulator = Accumulator::new(root);
        let mut reports = Vec::new();
        for (index, wave) in waves.iter().enumerate() {
            debug!("wave {index}: {} unit(s)", wave.len());
            let outcomes = self.run_wave(&accumulator, manifest, wave)?;
            reports.extend(outcomes.into_iter().filter_map(|o| match o {
                UnitOutcome::Published(report) => Some(report),
                UnitOutcome::AlreadyVisited => None,
            }));
        }

        let Some(graph) = accumulator.whole_program() else {
            return Err(PkgRankError::MissingFragment {
                unit: root.to_string(),
                dependency: root.to_string(),
            });
        };
        Ok(ScheduleRun {
            graph,
            reports,
            waves: waves.len(),
        })
    }

    fn run_wave(
        &self,
        accumulator: &Accumulator,
        manifest: &UnitManifest,
        wave: &[String],
    ) -> Result<Vec<UnitOutcome>> {
        let process = |unit: &String| {
            accumulator.process(unit, manifest.local_edges(unit), manifest.imports(unit))
        };
        if self.parallel {
            wave.par_iter().map(process).collect()
        } else {
            wave.iter().map(process).collect()
        }
    }
}
