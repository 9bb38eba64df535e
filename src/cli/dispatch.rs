// src/cli/dispatch.rs
//! Runs a parsed subcommand: load config and input, accumulate, render.

use anyhow::{Context, Result};

use super::args::{Commands, SourceArgs};
use crate::config::Config;
use crate::exit::PkgRankExit;
use crate::graph::rank::{CentralityMeasure, Orientation, RankEngine};
use crate::graph::{ScheduleRun, Scheduler};
use crate::input::{self, VersionStripper};
use crate::logging;
use crate::report::{self, OutputFormat};

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<PkgRankExit> {
    match command {
        Commands::Rank {
            source,
            reverse,
            top,
            format,
            measure,
        } => handle_rank(&source, reverse, top, format, measure.as_deref()),
        Commands::Edges { source } => handle_edges(&source),
    }
}

fn handle_rank(
    source: &SourceArgs,
    reverse: bool,
    top: usize,
    format: OutputFormat,
    measure: Option<&str>,
) -> Result<PkgRankExit> {
    let measure = measure
        .map(str::parse::<CentralityMeasure>)
        .transpose()?;
    let (config, root, run) = accumulate(source)?;
    let measure = match measure {
        Some(measure) => measure,
        None => config.measure()?,
    };
    let orientation = if reverse {
        Orientation::Consumer
    } else {
        Orientation::Substrate
    };
    let ranking = RankEngine::rank(
        &run.graph,
        orientation,
        measure,
        config.rank.params(),
    );
    let rendered = report::render_ranking(&root, orientation, &ranking, top, format)?;
    print!("{rendered}");
    Ok(PkgRankExit::Success)
}

fn handle_edges(source: &SourceArgs) -> Result<PkgRankExit> {
    let (_, _, run) = accumulate(source)?;
    print!("{}", report::render_edges(&run.graph));
    Ok(PkgRankExit::Success)
}

/// Loads configuration and input, then accumulates the root's graph.
fn accumulate(source: &SourceArgs) -> Result<(Config, String, ScheduleRun)> {
    logging::init(source.verbose)?;
    let config = match &source.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let stripper = if config.schedule.strip_versions {
        Some(VersionStripper::new()?)
    } else {
        None
    };
    let text = input::read_source(&source.input)?;
    let manifest = input::parse(&text, stripper.as_ref())
        .with_context(|| format!("failed to parse {}", source.input.display()))?;
    let root = match &stripper {
        Some(s) => s.strip(&source.root).into_owned(),
        None => source.root.clone(),
    };

    let scheduler = Scheduler::new(source.parallel || config.schedule.parallel);
    let run = scheduler
        .run(&manifest, &root)
        .with_context(|| format!("failed to accumulate the graph of {root}"))?;
    log::info!(
        "{root}: whole-program graph has {} node(s), {} edge(s), total overlap {}",
        run.graph.order(),
        run.graph.size(),
        run.total_overlap()
    );
    Ok((config, root, run))
}
