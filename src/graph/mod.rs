// src/graph/mod.rs
//! Dependency graph accumulation and ranking.
//!
//! ```text
//! raw (unit, importer, imported) edges
//!        ↓  schedule::UnitManifest
//! dependency-ordered waves
//!        ↓  accumulate::Accumulator (one fragment per unit)
//! whole-program fragment (root unit)
//!        ↓  rank::builder::from_fragment
//! ImportGraph
//!        ↓  rank::pagerank
//! Ranking
//! ```

pub mod accumulate;
pub mod edge;
pub mod fragment;
pub mod key;
pub mod rank;
pub mod registry;
pub mod schedule;

pub use accumulate::{build_fragment, Accumulator, LocalEdge, UnitOutcome, UnitReport};
pub use edge::{DirectedEdge, Edge, EdgeError, EdgeKind, HyperEdge, UndirectedEdge};
pub use fragment::{accumulate_weights, Graph, Insertion, MergeFn, MergeOptions, MergeOutcome};
pub use key::{EdgeKey, Node, NodeData, NodeKey};
pub use registry::{FragmentLookup, FragmentRegistry};
pub use schedule::{ScheduleRun, Scheduler, UnitManifest};
