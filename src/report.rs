// src/report.rs
//! Rendering of rankings and whole-program edges.

use std::fmt::Write;

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::graph::rank::{CentralityMeasure, Orientation, RankedNode, Ranking};
use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct RankingDocument<'a> {
    root: &'a str,
    orientation: Orientation,
    measure: CentralityMeasure,
    converged: bool,
    iterations: usize,
    delta: f64,
    ranking: &'a [RankedNode],
}

/// Renders the top `top` entries of `ranking`.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render_ranking(
    root: &str,
    orientation: Orientation,
    ranking: &Ranking,
    top: usize,
    format: OutputFormat,
) -> Result<String> {
    let rows = ranking.top(top);
    match format {
        OutputFormat::Json => {
            let doc = RankingDocument {
                root,
                orientation,
                measure: ranking.measure,
                converged: ranking.converged,
                iterations: ranking.iterations,
                delta: ranking.delta,
                ranking: rows,
            };
            let mut json = serde_json::to_string_pretty(&doc)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_table(root, orientation, ranking, rows)),
    }
}

fn render_table(
    root: &str,
    orientation: Orientation,
    ranking: &Ranking,
    rows: &[RankedNode],
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} ({orientation} {}, {} node(s))",
        "pkgrank".bold(),
        root.cyan(),
        ranking.measure,
        ranking.len()
    );
    if rows.is_empty() {
        let _ = writeln!(out, "{}", "no nodes to rank".dimmed());
        return out;
    }

    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:.6}",
            index + 1,
            row.label,
            row.score,
        );
    }
    if !ranking.converged {
        let _ = writeln!(
            out,
            "{} PageRank stopped after {} iteration(s) without converging (delta {:e})",
            "warning:".yellow().bold(),
            ranking.iterations,
            ranking.delta
        );
    }
    out
}

/// The whole-program graph's directed edges as `src dst` lines, sorted.
#[must_use]
pub fn render_edges(graph: &Graph) -> String {
    let mut out = String::new();
    for (src, dst, _) in graph.directed_edges() {
        let _ = writeln!(out, "{src} {dst}");
    }
    out
}
